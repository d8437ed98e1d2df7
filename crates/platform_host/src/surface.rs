//! Presentation-surface contracts for the document root node.
//!
//! The theme runtime only ever touches two things on the root node: mutually exclusive class
//! markers and CSS custom properties. Styling tables read those, nothing else.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

/// Host service for root-node class markers and CSS custom properties.
pub trait ThemeSurface {
    /// Removes every listed class marker from the root node. Absent markers are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when the root node is unavailable or rejects the update.
    fn remove_classes(&self, classes: &[&str]) -> Result<(), String>;

    /// Adds one class marker to the root node.
    ///
    /// # Errors
    ///
    /// Returns an error when the root node is unavailable or rejects the update.
    fn add_class(&self, class: &str) -> Result<(), String>;

    /// Sets a CSS custom property (for example `--background`) on the root node.
    ///
    /// # Errors
    ///
    /// Returns an error when the root node is unavailable or rejects the update.
    fn set_custom_property(&self, name: &str, value: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Surface for contexts without a document.
pub struct NoopThemeSurface;

impl ThemeSurface for NoopThemeSurface {
    fn remove_classes(&self, _classes: &[&str]) -> Result<(), String> {
        Ok(())
    }

    fn add_class(&self, _class: &str) -> Result<(), String> {
        Ok(())
    }

    fn set_custom_property(&self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

/// One mutation applied to a [`MemoryThemeSurface`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOperation {
    /// `remove_classes` with the listed markers.
    RemoveClasses(Vec<String>),
    /// `add_class` with one marker.
    AddClass(String),
    /// `set_custom_property` with name and value.
    SetCustomProperty(String, String),
}

#[derive(Debug, Default)]
struct MemorySurfaceState {
    classes: Vec<String>,
    properties: BTreeMap<String, String>,
    operations: Vec<SurfaceOperation>,
    update_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// Recording in-memory root node used by tests.
pub struct MemoryThemeSurface {
    inner: Rc<RefCell<MemorySurfaceState>>,
}

impl MemoryThemeSurface {
    /// Class markers currently present, in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.clone()
    }

    /// Current value of a custom property.
    pub fn custom_property(&self, name: &str) -> Option<String> {
        self.inner.borrow().properties.get(name).cloned()
    }

    /// Every mutation applied so far.
    pub fn operations(&self) -> Vec<SurfaceOperation> {
        self.inner.borrow().operations.clone()
    }

    /// Clears the recorded operation log without touching classes or properties.
    pub fn clear_operations(&self) {
        self.inner.borrow_mut().operations.clear();
    }

    /// Makes every subsequent update fail with `message` until cleared with `None`.
    pub fn fail_updates(&self, message: Option<&str>) {
        self.inner.borrow_mut().update_error = message.map(str::to_string);
    }
}

impl ThemeSurface for MemoryThemeSurface {
    fn remove_classes(&self, classes: &[&str]) -> Result<(), String> {
        let mut state = self.inner.borrow_mut();
        if let Some(err) = &state.update_error {
            return Err(err.clone());
        }
        state
            .classes
            .retain(|present| !classes.contains(&present.as_str()));
        state.operations.push(SurfaceOperation::RemoveClasses(
            classes.iter().map(|class| class.to_string()).collect(),
        ));
        Ok(())
    }

    fn add_class(&self, class: &str) -> Result<(), String> {
        let mut state = self.inner.borrow_mut();
        if let Some(err) = &state.update_error {
            return Err(err.clone());
        }
        if !state.classes.iter().any(|present| present == class) {
            state.classes.push(class.to_string());
        }
        state
            .operations
            .push(SurfaceOperation::AddClass(class.to_string()));
        Ok(())
    }

    fn set_custom_property(&self, name: &str, value: &str) -> Result<(), String> {
        let mut state = self.inner.borrow_mut();
        if let Some(err) = &state.update_error {
            return Err(err.clone());
        }
        state
            .properties
            .insert(name.to_string(), value.to_string());
        state.operations.push(SurfaceOperation::SetCustomProperty(
            name.to_string(),
            value.to_string(),
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn class_markers_behave_like_a_token_list() {
        let surface = MemoryThemeSurface::default();
        surface.add_class("light").expect("add");
        surface.add_class("light").expect("add twice");
        surface.add_class("site-root").expect("add unrelated");
        surface.remove_classes(&["light", "dark"]).expect("remove");

        assert_eq!(surface.classes(), vec!["site-root".to_string()]);
    }

    #[test]
    fn operations_are_recorded_in_call_order() {
        let surface = MemoryThemeSurface::default();
        surface.remove_classes(&["light", "dark"]).expect("remove");
        surface.add_class("dark").expect("add");
        surface
            .set_custom_property("--background", "#111111")
            .expect("set");

        assert_eq!(
            surface.operations(),
            vec![
                SurfaceOperation::RemoveClasses(vec!["light".to_string(), "dark".to_string()]),
                SurfaceOperation::AddClass("dark".to_string()),
                SurfaceOperation::SetCustomProperty(
                    "--background".to_string(),
                    "#111111".to_string()
                ),
            ]
        );
        assert_eq!(
            surface.custom_property("--background"),
            Some("#111111".to_string())
        );
    }

    #[test]
    fn failing_surface_rejects_updates_without_recording() {
        let surface = MemoryThemeSurface::default();
        surface.fail_updates(Some("document unavailable"));
        assert_eq!(
            surface.add_class("dark"),
            Err("document unavailable".to_string())
        );
        assert!(surface.operations().is_empty());
        assert!(surface.classes().is_empty());
    }
}
