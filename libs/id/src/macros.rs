//! Macros for declaring typed resource IDs from their segment tables.

/// Declares a typed ID for one provider-scoped resource kind.
///
/// The table lists each nested field with the literal segment name that
/// precedes its value, outermost first. This generates a struct with
/// `subscription_id`, `resource_group` and one `String` per field, plus:
/// - `new()` from already-known components
/// - `parse()` (exact segment names) and `parse_insensitively()` (repair)
/// - `id()`, `Display`, `FromStr`, `Serialize` and `Deserialize`
/// - a [`ResourceId`](crate::ResourceId) impl
///
/// A trailing `parent` clause maps the parent kind's fields onto this kind's
/// (listed in the parent's field order) and names the field supplied by the
/// child, generating a
/// [`ChildResourceId`](crate::ChildResourceId) impl.
///
/// # Example
///
/// ```ignore
/// define_resource_id! {
///     DedicatedHostGroupId("Dedicated Host Group", "Microsoft.Compute") {
///         name: "hostGroups",
///     }
/// }
///
/// define_resource_id! {
///     DedicatedHostId("Dedicated Host", "Microsoft.Compute") {
///         host_group_name: "hostGroups",
///         name: "hosts",
///     }
///     parent DedicatedHostGroupId { host_group_name: name } => name;
/// }
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $name:ident($kind:literal, $provider:literal) {
            $($field:ident: $segment:literal),+ $(,)?
        }
        $(
            parent $parent:ident { $($child_field:ident: $parent_field:ident),* $(,)? } => $own:ident;
        )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            subscription_id: String,
            resource_group: String,
            $($field: String,)+
        }

        impl $name {
            /// Human-readable kind name.
            pub const KIND: &'static str = $kind;

            /// Provider namespace this kind lives under.
            pub const PROVIDER: &'static str = $provider;

            /// Literal segment names, outermost first.
            pub const SEGMENTS: &'static [&'static str] = &[$($segment),+];

            /// Creates an ID from already-known components, e.g. for a
            /// resource that is about to be created.
            ///
            /// Components are not checked: the result only round-trips
            /// through [`parse`](Self::parse) when every value is non-empty
            /// and free of `/`. Use `ResourceKind::build` to construct from
            /// untrusted input.
            #[must_use]
            pub fn new(
                subscription_id: impl Into<String>,
                resource_group: impl Into<String>,
                $($field: impl Into<String>,)+
            ) -> Self {
                Self {
                    subscription_id: subscription_id.into(),
                    resource_group: resource_group.into(),
                    $($field: $field.into(),)+
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

            $(
                #[must_use]
                pub fn $field(&self) -> &str {
                    &self.$field
                }
            )+

            /// Parses a canonical ID. Literal segment names must match exactly.
            pub fn parse(input: &str) -> Result<Self, $crate::ParseError> {
                Self::parse_with(input, $crate::Casing::Exact)
            }

            /// Parses an ID whose literal segment names may be miscased.
            ///
            /// Only for repairing IDs returned by the management API; never
            /// use this to validate user input.
            pub fn parse_insensitively(input: &str) -> Result<Self, $crate::ParseError> {
                Self::parse_with(input, $crate::Casing::Insensitive)
            }

            fn parse_with(input: &str, casing: $crate::Casing) -> Result<Self, $crate::ParseError> {
                let mut consumer =
                    $crate::SegmentConsumer::begin(input, $kind, Some($provider), casing)?;
                $(let $field = consumer.take($segment)?;)+
                let (subscription_id, resource_group) = consumer.finish()?;

                Ok(Self {
                    subscription_id,
                    resource_group,
                    $($field,)+
                })
            }

            /// Formats the ID in canonical form.
            #[must_use]
            pub fn id(&self) -> String {
                <Self as $crate::ResourceId>::id(self)
            }
        }

        impl $crate::ResourceId for $name {
            const KIND: &'static str = $kind;
            const PROVIDER: Option<&'static str> = Some($provider);
            const SEGMENTS: &'static [&'static str] = &[$($segment),+];
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn parse(input: &str) -> Result<Self, $crate::ParseError> {
                Self::parse(input)
            }

            fn parse_insensitively(input: &str) -> Result<Self, $crate::ParseError> {
                Self::parse_insensitively(input)
            }

            fn subscription_id(&self) -> &str {
                &self.subscription_id
            }

            fn resource_group(&self) -> &str {
                &self.resource_group
            }

            fn segment_values(&self) -> Vec<&str> {
                vec![$(self.$field.as_str()),+]
            }
        }

        $(
            impl $crate::ChildResourceId for $name {
                type Parent = $parent;

                fn from_parent(parent: &$parent, $own: impl Into<String>) -> Self {
                    Self {
                        subscription_id: parent.subscription_id().to_string(),
                        resource_group: parent.resource_group().to_string(),
                        $($child_field: parent.$parent_field().to_string(),)*
                        $own: $own.into(),
                    }
                }

                fn parent(&self) -> $parent {
                    $parent::new(
                        self.subscription_id.clone(),
                        self.resource_group.clone(),
                        $(self.$child_field.clone(),)*
                    )
                }
            }
        )?

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.id())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let s = <String as $crate::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::serde::de::Error::custom)
            }
        }
    };
}

/// Declares the kind registry: a `ResourceKind` tag per typed ID and an
/// `AnyResourceId` sum type over all of them.
macro_rules! define_resource_kinds {
    ($($variant:ident($id:ty)),+ $(,)?) => {
        /// Every supported resource kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ResourceKind {
            $($variant,)+
        }

        impl ResourceKind {
            /// All kinds, in declaration order.
            pub const ALL: &'static [ResourceKind] = &[$(ResourceKind::$variant),+];

            /// The kind's identifier-style name, e.g. `"AvailabilitySet"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(ResourceKind::$variant => stringify!($variant),)+
                }
            }

            /// The kind's human-readable name, e.g. `"Availability Set"`.
            pub fn display_name(self) -> &'static str {
                match self {
                    $(ResourceKind::$variant => <$id as $crate::ResourceId>::KIND,)+
                }
            }

            /// Provider namespace, or `None` for resource groups.
            pub fn provider(self) -> Option<&'static str> {
                match self {
                    $(ResourceKind::$variant => <$id as $crate::ResourceId>::PROVIDER,)+
                }
            }

            /// Literal segment names, outermost first.
            pub fn segments(self) -> &'static [&'static str] {
                match self {
                    $(ResourceKind::$variant => <$id as $crate::ResourceId>::SEGMENTS,)+
                }
            }

            /// Field names parallel to [`Self::segments`].
            pub fn fields(self) -> &'static [&'static str] {
                match self {
                    $(ResourceKind::$variant => <$id as $crate::ResourceId>::FIELDS,)+
                }
            }

            /// Parses `input` as this kind with exact segment names.
            pub fn parse(self, input: &str) -> Result<AnyResourceId, $crate::ParseError> {
                match self {
                    $(ResourceKind::$variant => {
                        <$id as $crate::ResourceId>::parse(input).map(AnyResourceId::$variant)
                    })+
                }
            }

            /// Parses `input` as this kind, tolerating miscased segment names.
            pub fn parse_insensitively(self, input: &str) -> Result<AnyResourceId, $crate::ParseError> {
                match self {
                    $(ResourceKind::$variant => {
                        <$id as $crate::ResourceId>::parse_insensitively(input).map(AnyResourceId::$variant)
                    })+
                }
            }
        }

        /// A typed ID of any supported kind.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum AnyResourceId {
            $($variant($id),)+
        }

        impl AnyResourceId {
            /// The kind of this ID.
            pub fn kind(&self) -> ResourceKind {
                match self {
                    $(AnyResourceId::$variant(_) => ResourceKind::$variant,)+
                }
            }

            /// The subscription the resource lives in.
            pub fn subscription_id(&self) -> &str {
                match self {
                    $(AnyResourceId::$variant(id) => $crate::ResourceId::subscription_id(id),)+
                }
            }

            /// The resource group the resource lives in.
            pub fn resource_group(&self) -> &str {
                match self {
                    $(AnyResourceId::$variant(id) => $crate::ResourceId::resource_group(id),)+
                }
            }

            /// Nested segment values, parallel to the kind's segments.
            pub fn segment_values(&self) -> Vec<&str> {
                match self {
                    $(AnyResourceId::$variant(id) => $crate::ResourceId::segment_values(id),)+
                }
            }

            /// Formats the ID in canonical form.
            pub fn id(&self) -> String {
                match self {
                    $(AnyResourceId::$variant(id) => $crate::ResourceId::id(id),)+
                }
            }

            /// Describes the ID for user-facing messages.
            pub fn describe(&self) -> String {
                match self {
                    $(AnyResourceId::$variant(id) => $crate::ResourceId::describe(id),)+
                }
            }
        }

        $(
            impl From<$id> for AnyResourceId {
                fn from(id: $id) -> Self {
                    AnyResourceId::$variant(id)
                }
            }
        )+
    };
}

pub(crate) use define_resource_kinds;
