//! Typed ID definitions for every supported resource kind.
//!
//! Each kind is declared by the literal segment names that lead to it in the
//! provider's naming hierarchy. Kinds nested under another kind name their
//! parent so child IDs can be built from a parent ID.

use crate::consumer::SegmentConsumer;
use crate::define_resource_id;
use crate::path::Casing;
use crate::{ParseError, ResourceId};

// =============================================================================
// Resource Groups
// =============================================================================

/// A resource group: `/subscriptions/{s}/resourceGroups/{rg}`.
///
/// The only kind without a `providers` segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceGroupId {
    subscription_id: String,
    resource_group: String,
}

impl ResourceGroupId {
    #[must_use]
    pub fn new(subscription_id: impl Into<String>, resource_group: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
        }
    }

    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    #[must_use]
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, Casing::Exact)
    }

    pub fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, Casing::Insensitive)
    }

    fn parse_with(input: &str, casing: Casing) -> Result<Self, ParseError> {
        let consumer = SegmentConsumer::begin(input, Self::KIND, None, casing)?;
        let (subscription_id, resource_group) = consumer.finish()?;
        Ok(Self {
            subscription_id,
            resource_group,
        })
    }

    #[must_use]
    pub fn id(&self) -> String {
        <Self as ResourceId>::id(self)
    }
}

impl ResourceId for ResourceGroupId {
    const KIND: &'static str = "Resource Group";
    const PROVIDER: Option<&'static str> = None;
    const SEGMENTS: &'static [&'static str] = &[];
    const FIELDS: &'static [&'static str] = &[];

    fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse(input)
    }

    fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_insensitively(input)
    }

    fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    fn resource_group(&self) -> &str {
        &self.resource_group
    }

    fn segment_values(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl std::fmt::Display for ResourceGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}

impl std::str::FromStr for ResourceGroupId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for ResourceGroupId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> serde::Deserialize<'de> for ResourceGroupId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Compute
// =============================================================================

define_resource_id! {
    AvailabilitySetId("Availability Set", "Microsoft.Compute") {
        name: "availabilitySets",
    }
}

define_resource_id! {
    DedicatedHostGroupId("Dedicated Host Group", "Microsoft.Compute") {
        name: "hostGroups",
    }
}

define_resource_id! {
    DedicatedHostId("Dedicated Host", "Microsoft.Compute") {
        host_group_name: "hostGroups",
        name: "hosts",
    }
    parent DedicatedHostGroupId { host_group_name: name } => name;
}

define_resource_id! {
    ManagedDiskId("Managed Disk", "Microsoft.Compute") {
        disk_name: "disks",
    }
}

define_resource_id! {
    DiskEncryptionSetId("Disk Encryption Set", "Microsoft.Compute") {
        name: "diskEncryptionSets",
    }
}

define_resource_id! {
    ImageId("Image", "Microsoft.Compute") {
        name: "images",
    }
}

define_resource_id! {
    ProximityPlacementGroupId("Proximity Placement Group", "Microsoft.Compute") {
        name: "proximityPlacementGroups",
    }
}

define_resource_id! {
    SnapshotId("Snapshot", "Microsoft.Compute") {
        name: "snapshots",
    }
}

define_resource_id! {
    /// A Shared Image Gallery.
    SharedImageGalleryId("Shared Image Gallery", "Microsoft.Compute") {
        name: "galleries",
    }
}

define_resource_id! {
    /// An image definition within a Shared Image Gallery.
    SharedImageId("Shared Image", "Microsoft.Compute") {
        gallery: "galleries",
        name: "images",
    }
    parent SharedImageGalleryId { gallery: name } => name;
}

define_resource_id! {
    /// A published version of a Shared Image.
    SharedImageVersionId("Shared Image Version", "Microsoft.Compute") {
        gallery: "galleries",
        image_name: "images",
        version: "versions",
    }
    parent SharedImageId { gallery: gallery, image_name: name } => version;
}

define_resource_id! {
    VirtualMachineId("Virtual Machine", "Microsoft.Compute") {
        name: "virtualMachines",
    }
}

define_resource_id! {
    VirtualMachineExtensionId("Virtual Machine Extension", "Microsoft.Compute") {
        virtual_machine_name: "virtualMachines",
        name: "extensions",
    }
    parent VirtualMachineId { virtual_machine_name: name } => name;
}

define_resource_id! {
    /// A data disk attached to a virtual machine.
    DataDiskId("Data Disk", "Microsoft.Compute") {
        virtual_machine_name: "virtualMachines",
        name: "dataDisks",
    }
    parent VirtualMachineId { virtual_machine_name: name } => name;
}

define_resource_id! {
    VirtualMachineScaleSetId("Virtual Machine Scale Set", "Microsoft.Compute") {
        name: "virtualMachineScaleSets",
    }
}

define_resource_id! {
    VirtualMachineScaleSetExtensionId("Virtual Machine Scale Set Extension", "Microsoft.Compute") {
        virtual_machine_scale_set_name: "virtualMachineScaleSets",
        name: "extensions",
    }
    parent VirtualMachineScaleSetId { virtual_machine_scale_set_name: name } => name;
}

// =============================================================================
// Devices
// =============================================================================

define_resource_id! {
    /// An IoT Hub. The management API spells the segment `IotHubs`.
    IotHubId("IoT Hub", "Microsoft.Devices") {
        name: "IotHubs",
    }
}

define_resource_id! {
    IotHubConsumerGroupId("IoT Hub Consumer Group", "Microsoft.Devices") {
        iot_hub_name: "IotHubs",
        event_hub_endpoint_name: "eventHubEndpoints",
        name: "ConsumerGroups",
    }
}

// =============================================================================
// Network
// =============================================================================

define_resource_id! {
    ApplicationGatewayId("Application Gateway", "Microsoft.Network") {
        name: "applicationGateways",
    }
}

define_resource_id! {
    NetworkInterfaceId("Network Interface", "Microsoft.Network") {
        name: "networkInterfaces",
    }
}

define_resource_id! {
    VirtualNetworkId("Virtual Network", "Microsoft.Network") {
        name: "virtualNetworks",
    }
}

define_resource_id! {
    SubnetId("Subnet", "Microsoft.Network") {
        virtual_network_name: "virtualNetworks",
        name: "subnets",
    }
    parent VirtualNetworkId { virtual_network_name: name } => name;
}

define_resource_id! {
    VirtualNetworkGatewayId("Virtual Network Gateway", "Microsoft.Network") {
        name: "virtualNetworkGateways",
    }
}

define_resource_id! {
    VirtualNetworkGatewayIpConfigurationId("Virtual Network Gateway Ip Configuration", "Microsoft.Network") {
        virtual_network_gateway_name: "virtualNetworkGateways",
        name: "ipConfigurations",
    }
    parent VirtualNetworkGatewayId { virtual_network_gateway_name: name } => name;
}

define_resource_id! {
    FrontDoorId("Front Door", "Microsoft.Network") {
        name: "frontDoors",
    }
}

define_resource_id! {
    BackendPoolId("Backend Pool", "Microsoft.Network") {
        front_door_name: "frontDoors",
        name: "backendPools",
    }
    parent FrontDoorId { front_door_name: name } => name;
}

define_resource_id! {
    FrontendEndpointId("Frontend Endpoint", "Microsoft.Network") {
        front_door_name: "frontDoors",
        name: "frontendEndpoints",
    }
    parent FrontDoorId { front_door_name: name } => name;
}

define_resource_id! {
    HealthProbeId("Health Probe", "Microsoft.Network") {
        front_door_name: "frontDoors",
        name: "healthProbeSettings",
    }
    parent FrontDoorId { front_door_name: name } => name;
}

define_resource_id! {
    LoadBalancingId("Load Balancing", "Microsoft.Network") {
        front_door_name: "frontDoors",
        name: "loadBalancingSettings",
    }
    parent FrontDoorId { front_door_name: name } => name;
}

define_resource_id! {
    RoutingRuleId("Routing Rule", "Microsoft.Network") {
        front_door_name: "frontDoors",
        name: "routingRules",
    }
    parent FrontDoorId { front_door_name: name } => name;
}

define_resource_id! {
    PrivateDnsZoneConfigId("Private Dns Zone Config", "Microsoft.Network") {
        private_endpoint_name: "privateEndpoints",
        private_dns_zone_group_name: "privateDnsZoneGroups",
        name: "privateDnsZoneConfigs",
    }
}

// =============================================================================
// Web
// =============================================================================

define_resource_id! {
    AppServicePlanId("App Service Plan", "Microsoft.Web") {
        name: "serverfarms",
    }
}

define_resource_id! {
    AppServiceId("App Service", "Microsoft.Web") {
        site_name: "sites",
    }
}

define_resource_id! {
    AppServiceSlotId("App Service Slot", "Microsoft.Web") {
        site_name: "sites",
        slot_name: "slots",
    }
    parent AppServiceId { site_name: site_name } => slot_name;
}

// =============================================================================
// Containers
// =============================================================================

define_resource_id! {
    KubernetesClusterId("Kubernetes Cluster", "Microsoft.ContainerService") {
        managed_cluster_name: "managedClusters",
    }
}

define_resource_id! {
    NodePoolId("Node Pool", "Microsoft.ContainerService") {
        managed_cluster_name: "managedClusters",
        agent_pool_name: "agentPools",
    }
    parent KubernetesClusterId { managed_cluster_name: managed_cluster_name } => agent_pool_name;
}

// =============================================================================
// Batch
// =============================================================================

define_resource_id! {
    BatchAccountId("Batch Account", "Microsoft.Batch") {
        batch_account_name: "batchAccounts",
    }
}

define_resource_id! {
    BatchPoolId("Batch Pool", "Microsoft.Batch") {
        batch_account_name: "batchAccounts",
        name: "pools",
    }
    parent BatchAccountId { batch_account_name: batch_account_name } => name;
}

define_resource_id! {
    BatchCertificateId("Batch Certificate", "Microsoft.Batch") {
        batch_account_name: "batchAccounts",
        name: "certificates",
    }
    parent BatchAccountId { batch_account_name: batch_account_name } => name;
}

// =============================================================================
// Storage
// =============================================================================

define_resource_id! {
    StorageAccountId("Storage Account", "Microsoft.Storage") {
        storage_account_name: "storageAccounts",
    }
}

define_resource_id! {
    /// A blob container addressed through the management plane.
    StorageContainerResourceManagerId("Storage Container Resource Manager", "Microsoft.Storage") {
        storage_account_name: "storageAccounts",
        blob_service_name: "blobServices",
        container_name: "containers",
    }
}

// =============================================================================
// Databases
// =============================================================================

define_resource_id! {
    SqlServerId("SQL Server", "Microsoft.Sql") {
        name: "servers",
    }
}

define_resource_id! {
    SqlDatabaseId("SQL Database", "Microsoft.Sql") {
        server_name: "servers",
        name: "databases",
    }
    parent SqlServerId { server_name: name } => name;
}

define_resource_id! {
    DatabaseAccountId("Database Account", "Microsoft.DocumentDB") {
        name: "databaseAccounts",
    }
}

// =============================================================================
// Identity and Secrets
// =============================================================================

define_resource_id! {
    VaultId("Key Vault", "Microsoft.KeyVault") {
        name: "vaults",
    }
}

define_resource_id! {
    UserAssignedIdentityId("User Assigned Identity", "Microsoft.ManagedIdentity") {
        name: "userAssignedIdentities",
    }
}

// =============================================================================
// CDN
// =============================================================================

define_resource_id! {
    CdnProfileId("CDN Profile", "Microsoft.Cdn") {
        profile_name: "profiles",
    }
}

define_resource_id! {
    CdnEndpointId("CDN Endpoint", "Microsoft.Cdn") {
        profile_name: "profiles",
        endpoint_name: "endpoints",
    }
    parent CdnProfileId { profile_name: profile_name } => endpoint_name;
}

// =============================================================================
// Integration
// =============================================================================

define_resource_id! {
    WorkflowId("Logic App Workflow", "Microsoft.Logic") {
        workflow_name: "workflows",
    }
}

define_resource_id! {
    AutomationAccountId("Automation Account", "Microsoft.Automation") {
        name: "automationAccounts",
    }
}

define_resource_id! {
    AutomationWebhookId("Automation Webhook", "Microsoft.Automation") {
        automation_account_name: "automationAccounts",
        name: "webhooks",
    }
    parent AutomationAccountId { automation_account_name: name } => name;
}

define_resource_id! {
    ApiManagementId("API Management", "Microsoft.ApiManagement") {
        service_name: "service",
    }
}

define_resource_id! {
    ApiOperationPolicyId("API Operation Policy", "Microsoft.ApiManagement") {
        service_name: "service",
        api_name: "apis",
        operation_name: "operations",
        policy_name: "policies",
    }
}

// =============================================================================
// Tests
// =============================================================================
