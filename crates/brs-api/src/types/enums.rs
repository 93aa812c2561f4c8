//! Enumerations for the service's `kXxx`-style string values.
//!
//! Parsing with `FromStr` is strict and only accepts the listed values,
//! which is what request arguments go through. Deserializing a response
//! keeps any other string in `Unrecognized`, so a value added on the
//! service side still reads and renders verbatim.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:tt ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, strum::EnumString)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[strum(serialize = $wire)]
                $variant,
            )+
            /// A value this crate does not list, kept as sent.
            #[strum(disabled)]
            Unrecognized(String),
        }

        impl $name {
            /// The exact string the service uses for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unrecognized(wire) => wire,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let wire = String::deserialize(deserializer)?;
                Ok(wire
                    .parse::<Self>()
                    .unwrap_or_else(|_| Self::Unrecognized(wire)))
            }
        }
    };
}

wire_enum! {
    /// Source environment (adapter) a protection source belongs to.
    pub enum Environment {
        VMware => "kVMware",
        HyperV => "kHyperV",
        Sql => "kSQL",
        View => "kView",
        Puppeteer => "kPuppeteer",
        Physical => "kPhysical",
        Pure => "kPure",
        Nimble => "kNimble",
        Azure => "kAzure",
        Netapp => "kNetapp",
        Agent => "kAgent",
        GenericNas => "kGenericNas",
        Acropolis => "kAcropolis",
        PhysicalFiles => "kPhysicalFiles",
        Isilon => "kIsilon",
        Gpfs => "kGPFS",
        Kvm => "kKVM",
        Aws => "kAWS",
        Exchange => "kExchange",
        HyperVVss => "kHyperVVSS",
        Oracle => "kOracle",
        Gcp => "kGCP",
        FlashBlade => "kFlashBlade",
        AwsNative => "kAWSNative",
        O365 => "kO365",
        O365Outlook => "kO365Outlook",
        HyperFlex => "kHyperFlex",
        GcpNative => "kGCPNative",
        AzureNative => "kAzureNative",
        Kubernetes => "kKubernetes",
        Elastifile => "kElastifile",
        Ad => "kAD",
        RdsSnapshotManager => "kRDSSnapshotManager",
        Cassandra => "kCassandra",
        MongoDb => "kMongoDB",
        Couchbase => "kCouchbase",
        Hdfs => "kHdfs",
        HBase => "kHBase",
        Uda => "kUDA",
        Sfdc => "kSfdc",
        AwsS3 => "kAwsS3",
        SapHana => "kSAPHANA",
        IbmFlashSystem => "kIbmFlashSystem",
        Hive => "kHive",
        RemoteAdapter => "kRemoteAdapter",
    }
}

wire_enum! {
    /// Who issued a request; the service prioritises interactive callers.
    pub enum RequestInitiatorType {
        UiUser => "UIUser",
        UiAuto => "UIAuto",
        Helios => "Helios",
    }
}

wire_enum! {
    /// Progress of a source's registration/authentication.
    pub enum AuthenticationStatus {
        Pending => "kPending",
        Scheduled => "kScheduled",
        Finished => "kFinished",
        RefreshInProgress => "kRefreshInProgress",
    }
}

wire_enum! {
    /// Operating system family of a host.
    pub enum HostType {
        Linux => "kLinux",
        Windows => "kWindows",
        Aix => "kAix",
        Solaris => "kSolaris",
        SapHana => "kSapHana",
        SapOracle => "kSapOracle",
        CockroachDb => "kCockroachDB",
        MySql => "kMySQL",
        Other => "kOther",
        SapSybase => "kSapSybase",
        SapMaxDb => "kSapMaxDB",
        SapSybaseIq => "kSapSybaseIQ",
        Db2 => "kDB2",
        SapAse => "kSapASE",
        MariaDb => "kMariaDB",
        PostgreSql => "kPostgreSQL",
        Vos => "kVOS",
        HpUx => "kHPUX",
    }
}

wire_enum! {
    /// Kind of physical protection source.
    pub enum PhysicalSourceType {
        Group => "kGroup",
        Host => "kHost",
        WindowsCluster => "kWindowsCluster",
        OracleRacCluster => "kOracleRACCluster",
        OracleApCluster => "kOracleAPCluster",
        UnixCluster => "kUnixCluster",
    }
}

wire_enum! {
    /// Kind of SQL protection source.
    pub enum SqlSourceType {
        Instance => "kInstance",
        Database => "kDatabase",
        Aag => "kAAG",
        AagRootContainer => "kAAGRootContainer",
        RootContainer => "kRootContainer",
    }
}

wire_enum! {
    /// Health of an installed agent as seen by the cluster.
    pub enum AgentStatus {
        Unknown => "kUnknown",
        Unreachable => "kUnreachable",
        Healthy => "kHealthy",
        Degraded => "kDegraded",
    }
}

wire_enum! {
    /// Whether an agent can be upgraded to the cluster's version.
    pub enum Upgradability {
        Upgradable => "kUpgradable",
        Current => "kCurrent",
        Unknown => "kUnknown",
        NonUpgradableInvalidVersion => "kNonUpgradableInvalidVersion",
        NonUpgradableAgentIsNewer => "kNonUpgradableAgentIsNewer",
        NonUpgradableAgentIsOld => "kNonUpgradableAgentIsOld",
    }
}

wire_enum! {
    /// State of the most recent agent upgrade.
    pub enum UpgradeStatus {
        Idle => "kIdle",
        Accepted => "kAccepted",
        Started => "kStarted",
        Finished => "kFinished",
        Scheduled => "kScheduled",
    }
}

wire_enum! {
    pub enum RecoveryModel {
        Simple => "kSimpleRecoveryModel",
        Full => "kFullRecoveryModel",
        BulkLogged => "kBulkLoggedRecoveryModel",
    }
}

wire_enum! {
    pub enum SqlServerDbState {
        Online => "kOnline",
        Restoring => "kRestoring",
        Recovering => "kRecovering",
        RecoveryPending => "kRecoveryPending",
        Suspect => "kSuspect",
        Emergency => "kEmergency",
        Offline => "kOffline",
        Copying => "kCopying",
        OfflineSecondary => "kOfflineSecondary",
    }
}

wire_enum! {
    pub enum DbFileType {
        Rows => "kRows",
        Log => "kLog",
        FileStream => "kFileStream",
        NotSupportedType => "kNotSupportedType",
        FullText => "kFullText",
    }
}

wire_enum! {
    /// How a throttling threshold is applied.
    pub enum PatternType {
        NoThrottling => "kNoThrottling",
        BaseThrottling => "kBaseThrottling",
        Fixed => "kFixed",
    }
}

wire_enum! {
    /// Protocol access granted to a subnet.
    pub enum SubnetAccess {
        Disabled => "kDisabled",
        ReadOnly => "kReadOnly",
        ReadWrite => "kReadWrite",
    }
}

wire_enum! {
    /// Cluster component a subnet whitelist entry applies to.
    pub enum SubnetComponent {
        Nas => "kNAS",
        Sql => "kSQL",
        Snapshot => "kSnapshot",
        ViewsAndSmb => "kViewsAndSmb",
    }
}

wire_enum! {
    pub enum HostSettingsResultType {
        Pass => "kPass",
        Fail => "kFail",
        Warning => "kWarning",
    }
}

wire_enum! {
    pub enum DayOfWeek {
        Sunday => "kSunday",
        Monday => "kMonday",
        Tuesday => "kTuesday",
        Wednesday => "kWednesday",
        Thursday => "kThursday",
        Friday => "kFriday",
        Saturday => "kSaturday",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn environment_uses_wire_strings() {
        assert_eq!(Environment::Physical.to_string(), "kPhysical");
        assert_eq!(Environment::Sql.as_str(), "kSQL");
        assert_eq!("kO365".parse::<Environment>().unwrap(), Environment::O365);
        assert_eq!("kSAPHANA".parse::<Environment>().unwrap(), Environment::SapHana);
    }

    #[test]
    fn environment_serde_matches_display() {
        let json = serde_json::to_string(&Environment::AwsNative).unwrap();
        assert_eq!(json, "\"kAWSNative\"");
        let parsed: Environment = serde_json::from_str("\"kHyperVVSS\"").unwrap();
        assert_eq!(parsed, Environment::HyperVVss);
    }

    #[test]
    fn parsing_rejects_unlisted_values() {
        assert!("kNotAnEnvironment".parse::<Environment>().is_err());
        assert!("Unrecognized".parse::<Environment>().is_err());
        assert!("kBogus".parse::<AgentStatus>().is_err());
    }

    #[test]
    fn unlisted_response_values_round_trip() {
        let parsed: Environment = serde_json::from_str("\"kNotAnEnvironment\"").unwrap();
        assert_eq!(parsed, Environment::Unrecognized("kNotAnEnvironment".into()));
        assert_eq!(parsed.to_string(), "kNotAnEnvironment");
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            "\"kNotAnEnvironment\""
        );

        let status: AuthenticationStatus = serde_json::from_str("\"kRetrying\"").unwrap();
        assert_eq!(status.as_str(), "kRetrying");
    }

    #[test]
    fn request_initiator_has_no_k_prefix() {
        assert_eq!(RequestInitiatorType::UiUser.to_string(), "UIUser");
        assert_eq!(
            "Helios".parse::<RequestInitiatorType>().unwrap(),
            RequestInitiatorType::Helios
        );
    }
}
