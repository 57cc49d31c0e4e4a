use crate::model::error::Error;
use crate::model::error::misc::MiscError;
use eframe::egui::IconData;
use rust_embed::RustEmbed;

pub const APP_ICON: &str = "appicon.png";

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

impl Assets {
    pub fn load_app_icon() -> Result<IconData, Error> {
        let icon_bytes = Assets::get(APP_ICON).ok_or_else(|| MiscError::AssetNotFound {
            name: APP_ICON.to_string(),
        })?;

        let image = image::load_from_memory(&icon_bytes.data)
            .map_err(|err| MiscError::IconDecodeFailed {
                reason: err.to_string(),
            })?
            .to_rgba8();

        let (width, height) = image.dimensions();
        let rgba = image.into_raw();

        Ok(IconData {
            rgba,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Assets;

    #[test]
    fn bundled_icon_decodes() {
        let icon = Assets::load_app_icon().expect("icon");
        assert_eq!((icon.width, icon.height), (64, 64));
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);
    }
}
