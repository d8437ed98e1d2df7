//! `document.documentElement`-backed presentation surface.

use platform_host::ThemeSurface;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, Default)]
/// Browser presentation surface targeting the `<html>` root element.
pub struct WebThemeSurface;

#[cfg(target_arch = "wasm32")]
fn root_element() -> Result<web_sys::HtmlElement, String> {
    web_sys::window()
        .ok_or_else(|| "window unavailable".to_string())?
        .document()
        .ok_or_else(|| "document unavailable".to_string())?
        .document_element()
        .ok_or_else(|| "document root element unavailable".to_string())?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| "document root is not an HTML element".to_string())
}

impl ThemeSurface for WebThemeSurface {
    fn remove_classes(&self, classes: &[&str]) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let class_list = root_element()?.class_list();
            for class in classes {
                class_list
                    .remove_1(class)
                    .map_err(|e| format!("classList.remove failed: {e:?}"))?;
            }
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = classes;
            Ok(())
        }
    }

    fn add_class(&self, class: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            root_element()?
                .class_list()
                .add_1(class)
                .map_err(|e| format!("classList.add failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = class;
            Ok(())
        }
    }

    fn set_custom_property(&self, name: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            root_element()?
                .style()
                .set_property(name, value)
                .map_err(|e| format!("style.setProperty failed for `{name}`: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, value);
            Ok(())
        }
    }
}
