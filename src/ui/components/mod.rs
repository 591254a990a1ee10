pub mod bonus_badge;
pub mod filter_bar;
pub mod isk_m3;
pub mod loading;
pub mod toast;
pub mod type_icon;

pub use bonus_badge::BonusBadge;
pub use filter_bar::FilterBar;
pub use isk_m3::IskM3;
pub use loading::Loading;
pub use toast::{push_toast, Toast, ToastKind, ToastMessage};
pub use type_icon::TypeIcon;
