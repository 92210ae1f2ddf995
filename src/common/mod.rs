mod command;
mod icon;
mod notification;
mod policy;
mod table;

pub use command::{CommandLine, Execution};
pub use icon::{
    image_names, images, report_unknown_image, resolve, PlatformIcon,
};
pub use notification::{DesktopNotifier, Note, Notify};
pub use policy::{decide, Decision};
pub use table::render_table;
