use crate::error::{Error, Result};
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::{
    collections::{BTreeMap, HashMap},
    fmt::Display,
    io::Write,
};

/// Prefix shared by AppKit's image name constants
const CONSTANT_PREFIX: &str = "NSImageName";

/// AppKit image names paired with the closest freedesktop icon name
// from https://developer.apple.com/documentation/appkit/nsimage/1520015-imagenamed
// and https://specifications.freedesktop.org/icon-naming-spec/latest/
const APPKIT_IMAGES: &[(&str, &str)] = &[
    ("actionTemplate", "system-run"),
    ("addTemplate", "list-add"),
    ("advanced", "preferences-other"),
    ("applicationIcon", "application-x-executable"),
    ("bluetoothTemplate", "bluetooth"),
    ("bonjour", "network-workgroup"),
    ("bookmarksTemplate", "bookmark-new"),
    ("caution", "dialog-warning"),
    ("colorPanel", "preferences-desktop-theme"),
    ("columnViewTemplate", "view-list"),
    ("computer", "computer"),
    ("enterFullScreenTemplate", "view-fullscreen"),
    ("everyone", "system-users"),
    ("exitFullScreenTemplate", "view-restore"),
    ("flowViewTemplate", "x-office-presentation"),
    ("folder", "folder"),
    ("folderBurnable", "media-optical"),
    ("folderSmart", "folder-saved-search"),
    ("followLinkFreestandingTemplate", "go-jump"),
    ("fontPanel", "preferences-desktop-font"),
    ("goLeftTemplate", "go-previous"),
    ("goRightTemplate", "go-next"),
    ("homeTemplate", "go-home"),
    ("iChatTheaterTemplate", "video-display"),
    ("iconViewTemplate", "view-grid"),
    ("info", "dialog-information"),
    ("invalidDataFreestandingTemplate", "dialog-error"),
    ("listViewTemplate", "view-list"),
    ("lockLockedTemplate", "changes-prevent"),
    ("lockUnlockedTemplate", "changes-allow"),
    ("menuMixedStateTemplate", "list-remove"),
    ("menuOnStateTemplate", "object-select"),
    ("multipleDocuments", "x-office-document"),
    ("network", "network-wired"),
    ("pathTemplate", "folder-open"),
    ("preferencesGeneral", "preferences-system"),
    ("quickLookTemplate", "edit-find"),
    ("refreshFreestandingTemplate", "view-refresh"),
    ("refreshTemplate", "view-refresh"),
    ("removeTemplate", "list-remove"),
    ("revealFreestandingTemplate", "system-search"),
    ("rightFacingTriangleTemplate", "go-next"),
    ("shareTemplate", "emblem-shared"),
    ("slideshowTemplate", "media-playback-start"),
    ("smartBadgeTemplate", "emblem-default"),
    ("statusAvailable", "user-available"),
    ("statusNone", "user-offline"),
    ("statusPartiallyAvailable", "user-away"),
    ("statusUnavailable", "user-busy"),
    ("stopProgressFreestandingTemplate", "process-stop"),
    ("stopProgressTemplate", "process-stop"),
    ("trashEmpty", "user-trash"),
    ("trashFull", "user-trash-full"),
    ("user", "avatar-default"),
    ("userAccounts", "system-users"),
    ("userGroup", "system-users"),
    ("userGuest", "avatar-default"),
];

/// Friendlier names for some of the images
const ALIASES: &[(&str, &str)] = &[
    ("arrow-left", "goLeftTemplate"),
    ("arrow-right", "goRightTemplate"),
    ("document", "multipleDocuments"),
    ("eye", "quickLookTemplate"),
    ("group", "userGroup"),
    ("lock", "lockLockedTemplate"),
    ("play", "slideshowTemplate"),
    ("theater", "iChatTheaterTemplate"),
    ("unlock", "lockUnlockedTemplate"),
];

/// Image names accepted on the command line, mapped to AppKit image names
static IMAGES: Lazy<BTreeMap<String, &'static str>> = Lazy::new(|| {
    APPKIT_IMAGES
        .iter()
        .map(|&(name, _)| (name.replace("Template", ""), name))
        .chain(ALIASES.iter().map(|&(alias, name)| (alias.to_owned(), name)))
        .collect()
});

/// AppKit constants mapped to the icon names the notification service understands
static PLATFORM_ICONS: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    APPKIT_IMAGES
        .iter()
        .map(|&(name, icon)| (constant_name(name), icon))
        .collect()
});

/// An icon constant resolved from a user-facing image name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformIcon(String);

impl Display for PlatformIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PlatformIcon {
    #[cfg(test)]
    pub fn from_constant(constant: &str) -> Self {
        Self(constant.to_owned())
    }

    /// The AppKit constant name, e.g. `NSImageNameCaution`
    pub fn constant(&self) -> &str {
        &self.0
    }

    /// Icon name to hand to the notification service
    pub fn freedesktop_name(&self) -> Result<&'static str> {
        PLATFORM_ICONS
            .get(&self.0)
            .copied()
            .ok_or_else(|| Error::MissingIcon(self.0.clone()))
    }
}

/// Turn an AppKit image name into the name of its constant
fn constant_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!(
            "{CONSTANT_PREFIX}{}{}",
            first.to_uppercase(),
            chars.as_str()
        ),
        None => CONSTANT_PREFIX.to_owned(),
    }
}

/// Resolve an optional image name into a platform icon
pub fn resolve(key: Option<&str>) -> Result<Option<PlatformIcon>> {
    key.map(|key| {
        IMAGES
            .get(key)
            .map(|name| PlatformIcon(constant_name(name)))
            .ok_or_else(|| Error::UnknownImage(key.to_owned()))
    })
    .transpose()
}

/// All valid image names, sorted
pub fn image_names() -> impl Iterator<Item = &'static str> {
    IMAGES.keys().map(String::as_str)
}

/// All valid image names with their icons, sorted by name
pub fn images() -> impl Iterator<Item = (&'static str, PlatformIcon)> {
    IMAGES
        .iter()
        .map(|(key, name)| (key.as_str(), PlatformIcon(constant_name(name))))
}

/// Print the valid image names followed by a diagnostic for the invalid one
pub fn report_unknown_image<W: Write>(writer: &mut W, key: &str) -> Result<()> {
    writeln!(
        writer,
        "valid image names:\n{}",
        image_names().map(|name| format!("  {name}")).join("\n")
    )?;
    writeln!(writer, "{}", Error::UnknownImage(key.to_owned()))?;
    Ok(())
}
