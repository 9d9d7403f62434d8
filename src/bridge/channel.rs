//! The closed catalog of IPC channel identifiers.
//!
//! Every cross-process operation the UI may perform is named here. Because
//! the catalog is an enum, the UI context cannot construct a channel the
//! privileged side did not agree to handle, which is the security boundary
//! the bridge exists to enforce.

use std::fmt;

/// One cross-process operation. Each variant maps to exactly one semantic
/// operation on the privileged side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    GetSetting,
    SetSetting,
    IsMonitored,
    SetMonitored,
    GetApps,
    GetAppVersion,
    ShouldLaunchOnLogin,
    SetShouldLaunchOnLogin,
    ShouldLogToFile,
    SetShouldLogToFile,
    LogFilePath,
    IsBrowserMonitored,
    GetDomainPreference,
    SetDomainPreference,
    GetFilterType,
    SetFilterType,
    GetDenylist,
    SetDenylist,
    GetAllowlist,
    SetAllowlist,
}

impl Channel {
    /// Every channel in the catalog. Hosts use this to verify full coverage
    /// of their handler table.
    pub const ALL: [Channel; 20] = [
        Channel::GetSetting,
        Channel::SetSetting,
        Channel::IsMonitored,
        Channel::SetMonitored,
        Channel::GetApps,
        Channel::GetAppVersion,
        Channel::ShouldLaunchOnLogin,
        Channel::SetShouldLaunchOnLogin,
        Channel::ShouldLogToFile,
        Channel::SetShouldLogToFile,
        Channel::LogFilePath,
        Channel::IsBrowserMonitored,
        Channel::GetDomainPreference,
        Channel::SetDomainPreference,
        Channel::GetFilterType,
        Channel::SetFilterType,
        Channel::GetDenylist,
        Channel::SetDenylist,
        Channel::GetAllowlist,
        Channel::SetAllowlist,
    ];

    /// Stable wire name of the channel.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::GetSetting => "get-setting",
            Channel::SetSetting => "set-setting",
            Channel::IsMonitored => "is-monitored",
            Channel::SetMonitored => "set-monitored",
            Channel::GetApps => "get-apps",
            Channel::GetAppVersion => "get-app-version",
            Channel::ShouldLaunchOnLogin => "should-launch-on-login",
            Channel::SetShouldLaunchOnLogin => "set-should-launch-on-login",
            Channel::ShouldLogToFile => "should-log-to-file",
            Channel::SetShouldLogToFile => "set-should-log-to-file",
            Channel::LogFilePath => "log-file-path",
            Channel::IsBrowserMonitored => "is-browser-monitored",
            Channel::GetDomainPreference => "get-domain-preference",
            Channel::SetDomainPreference => "set-domain-preference",
            Channel::GetFilterType => "get-filter-type",
            Channel::SetFilterType => "set-filter-type",
            Channel::GetDenylist => "get-denylist",
            Channel::SetDenylist => "set-denylist",
            Channel::GetAllowlist => "get-allowlist",
            Channel::SetAllowlist => "set-allowlist",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
