//! Enumerated codes used by the Endpoint Manager API.
//!
//! The gateway speaks in small integer codes; these enums carry the known
//! values and their wire codes. Unknown codes in responses are left as-is,
//! since response payloads are opaque to the adapter.

use std::str::FromStr;

/// Hosting region of an Endpoint Manager instance. Picks the gateway
/// subdomain the credential was issued for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Region {
    #[default]
    Us,
    Eu,
}

impl Region {
    /// Subdomain fragment used in the gateway hostname.
    pub fn subdomain(&self) -> &'static str {
        match self {
            Region::Us => "itsm-us1",
            Region::Eu => "itsm-eu1",
        }
    }
}

impl FromStr for Region {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us" | "itsm-us1" => Ok(Region::Us),
            "eu" | "itsm-eu1" => Ok(Region::Eu),
            _ => Err(()),
        }
    }
}

/// Operating system of an enrolled device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsType {
    Windows = 1,
    MacOs = 2,
    Linux = 3,
    Ios = 4,
    Android = 5,
}

impl OsType {
    /// Every OS type the API knows about. Device searches must always carry
    /// an OS-type predicate, so an empty selection expands to this set.
    pub const ALL: [OsType; 5] = [
        OsType::Windows,
        OsType::MacOs,
        OsType::Linux,
        OsType::Ios,
        OsType::Android,
    ];

    pub fn code(self) -> i64 {
        self as i64
    }
}

/// Connectivity filter for device searches. `All` emits no predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnlineStatus {
    #[default]
    All = 0,
    Online = 1,
    Offline = 2,
}

impl OnlineStatus {
    pub fn code(self) -> i64 {
        self as i64
    }
}

/// Install state of the security client on a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecurityClientStatus {
    NotInstalled = 1,
    Installing = 2,
    Installed = 3,
    Error = 4,
    Running = 5,
}

impl SecurityClientStatus {
    pub fn code(self) -> i64 {
        self as i64
    }
}

/// How a reboot command is delivered to a device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RebootType {
    Immediate = 1,
    /// Shows a warning to the user and waits out a timeout first.
    #[default]
    WithWarning = 2,
}

impl RebootType {
    pub fn code(self) -> i64 {
        self as i64
    }
}

/// Antivirus scan depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanType {
    Quick = 1,
    #[default]
    Full = 2,
}

impl ScanType {
    pub fn code(self) -> i64 {
        self as i64
    }
}

/// Action applied to detected malware.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalwareActionType {
    Quarantine = 1,
    Delete = 2,
    Ignore = 3,
    ReportFalsePositive = 4,
    #[default]
    Clean = 5,
}

impl MalwareActionType {
    pub fn code(self) -> i64 {
        self as i64
    }
}

/// Action applied to a quarantined file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuarantineActionType {
    Restore = 1,
    #[default]
    Delete = 2,
}

impl QuarantineActionType {
    pub fn code(self) -> i64 {
        self as i64
    }
}
