use crate::model::menu::{MenuDescriptor, MenuSection};
use crate::model::platform::Platform;

/// Menu and window-decoration policy for a platform.
///
/// Platforms with a unified menu bar get the application, edit and window sections and
/// native decorations. Everywhere else the window draws its own chrome: no menu, frameless.
pub fn build_menu(platform: Platform) -> (MenuDescriptor, bool) {
    if platform.has_unified_menu_bar() {
        let menu = MenuDescriptor::new()
            .with_section(MenuSection::Application)
            .with_section(MenuSection::Edit)
            .with_section(MenuSection::Window);
        (menu, false)
    } else {
        (MenuDescriptor::new(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::build_menu;
    use crate::model::menu::MenuSection;
    use crate::model::platform::Platform;

    #[test]
    fn macos_gets_three_sections_in_order_with_decorations() {
        let (menu, frameless) = build_menu(Platform::MacOs);
        assert_eq!(
            menu.sections(),
            &[MenuSection::Application, MenuSection::Edit, MenuSection::Window]
        );
        assert!(!frameless);
    }

    #[test]
    fn other_platforms_get_empty_menu_and_frameless_window() {
        for platform in [Platform::Windows, Platform::Linux] {
            let (menu, frameless) = build_menu(platform);
            assert!(menu.is_empty(), "{platform}");
            assert!(frameless, "{platform}");
        }
    }
}
