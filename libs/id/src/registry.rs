//! Dynamic dispatch over resource kinds.

use thiserror::Error;

use crate::kinds::*;
use crate::macros::define_resource_kinds;
use crate::{IdError, ParseError};

define_resource_kinds! {
    ResourceGroup(ResourceGroupId),
    AvailabilitySet(AvailabilitySetId),
    DedicatedHostGroup(DedicatedHostGroupId),
    DedicatedHost(DedicatedHostId),
    ManagedDisk(ManagedDiskId),
    DiskEncryptionSet(DiskEncryptionSetId),
    Image(ImageId),
    ProximityPlacementGroup(ProximityPlacementGroupId),
    Snapshot(SnapshotId),
    SharedImageGallery(SharedImageGalleryId),
    SharedImage(SharedImageId),
    SharedImageVersion(SharedImageVersionId),
    VirtualMachine(VirtualMachineId),
    VirtualMachineExtension(VirtualMachineExtensionId),
    DataDisk(DataDiskId),
    VirtualMachineScaleSet(VirtualMachineScaleSetId),
    VirtualMachineScaleSetExtension(VirtualMachineScaleSetExtensionId),
    IotHub(IotHubId),
    IotHubConsumerGroup(IotHubConsumerGroupId),
    ApplicationGateway(ApplicationGatewayId),
    NetworkInterface(NetworkInterfaceId),
    VirtualNetwork(VirtualNetworkId),
    Subnet(SubnetId),
    VirtualNetworkGateway(VirtualNetworkGatewayId),
    VirtualNetworkGatewayIpConfiguration(VirtualNetworkGatewayIpConfigurationId),
    FrontDoor(FrontDoorId),
    BackendPool(BackendPoolId),
    FrontendEndpoint(FrontendEndpointId),
    HealthProbe(HealthProbeId),
    LoadBalancing(LoadBalancingId),
    RoutingRule(RoutingRuleId),
    PrivateDnsZoneConfig(PrivateDnsZoneConfigId),
    AppServicePlan(AppServicePlanId),
    AppService(AppServiceId),
    AppServiceSlot(AppServiceSlotId),
    KubernetesCluster(KubernetesClusterId),
    NodePool(NodePoolId),
    BatchAccount(BatchAccountId),
    BatchPool(BatchPoolId),
    BatchCertificate(BatchCertificateId),
    StorageAccount(StorageAccountId),
    StorageContainerResourceManager(StorageContainerResourceManagerId),
    SqlServer(SqlServerId),
    SqlDatabase(SqlDatabaseId),
    DatabaseAccount(DatabaseAccountId),
    Vault(VaultId),
    UserAssignedIdentity(UserAssignedIdentityId),
    CdnProfile(CdnProfileId),
    CdnEndpoint(CdnEndpointId),
    Workflow(WorkflowId),
    AutomationAccount(AutomationAccountId),
    AutomationWebhook(AutomationWebhookId),
    ApiManagement(ApiManagementId),
    ApiOperationPolicy(ApiOperationPolicyId),
}

/// A kind name that does not match any supported kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown resource kind `{0}`")]
pub struct UnknownKindError(String);

impl ResourceKind {
    /// The kind's canonical template, e.g.
    /// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Compute/availabilitySets/{name}`.
    pub fn template(self) -> String {
        crate::format::template(self.provider(), self.segments(), self.fields())
    }

    /// Builds an ID of this kind from its components.
    ///
    /// The components are rendered and then strictly parsed, so values that
    /// are empty or contain `/` are rejected like any other bad input.
    pub fn build(
        self,
        subscription_id: &str,
        resource_group: &str,
        values: &[&str],
    ) -> Result<AnyResourceId, ParseError> {
        let segments = self.segments();
        let rendered = crate::format::render(
            subscription_id,
            resource_group,
            self.provider(),
            &segments[..values.len().min(segments.len())],
            &values[..values.len().min(segments.len())],
        );
        if values.len() != segments.len() {
            return Err(ParseError::new(
                self.display_name(),
                &rendered,
                IdError::malformed(format!(
                    "expected {} segment values ({}), got {}",
                    segments.len(),
                    segments.join(", "),
                    values.len()
                )),
            ));
        }
        self.parse(&rendered)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = UnknownKindError;

    /// Accepts `AvailabilitySet`, `AvailabilitySetId`, `availability-set` or
    /// `availability_set`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_kind_name(s);
        ResourceKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                let name = normalize_kind_name(kind.name());
                wanted == name || wanted.strip_suffix("id") == Some(name.as_str())
            })
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}

fn normalize_kind_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for AnyResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}
