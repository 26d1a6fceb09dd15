//! Active view selection.

use std::fmt;

use super::View;

/// Returned by [`ViewRotation::set_by_name`] for a name that is not a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownViewError {
    pub name: String,
    pub valid: Vec<&'static str>,
}

impl fmt::Display for UnknownViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown view '{}' (valid views: {})",
            self.name,
            self.valid.join(", ")
        )
    }
}

impl std::error::Error for UnknownViewError {}

/// Cycles through a fixed, ordered list of views.
///
/// `next` and `prev` wrap around in both directions; there is no terminal
/// state.
#[derive(Debug, Clone)]
pub struct ViewRotation {
    views: Vec<View>,
    index: usize,
}

impl ViewRotation {
    /// Rotation over `views`, starting at the first one. An empty list means
    /// every known view.
    pub fn new(views: Vec<View>) -> Self {
        let views = if views.is_empty() {
            View::all().to_vec()
        } else {
            views
        };
        Self { views, index: 0 }
    }

    pub fn current(&self) -> View {
        self.views[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn next(&mut self) -> View {
        self.index = (self.index + 1) % self.views.len();
        self.current()
    }

    pub fn prev(&mut self) -> View {
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(self.views.len() - 1);
        self.current()
    }

    /// Jumps to the view called `name`. An empty name selects the default
    /// view, or the first view when the default is not part of the rotation.
    pub fn set_by_name(&mut self, name: &str) -> Result<View, UnknownViewError> {
        let target = if name.is_empty() {
            View::default()
        } else {
            View::from_name(name).ok_or_else(|| self.unknown(name))?
        };

        if name.is_empty() && !self.views.contains(&target) {
            self.index = 0;
            return Ok(self.current());
        }

        let index = self
            .views
            .iter()
            .position(|v| *v == target)
            .ok_or_else(|| self.unknown(name))?;
        self.index = index;
        Ok(target)
    }

    fn unknown(&self, name: &str) -> UnknownViewError {
        UnknownViewError {
            name: name.to_string(),
            valid: self.views.iter().map(|v| v.name()).collect(),
        }
    }
}

impl Default for ViewRotation {
    fn default() -> Self {
        let mut rotation = Self::new(Vec::new());
        rotation.index = rotation
            .views
            .iter()
            .position(|v| *v == View::default())
            .unwrap_or(0);
        rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> ViewRotation {
        ViewRotation::new(vec![View::Databases, View::TableOps, View::TableIo])
    }

    #[test]
    fn next_wraps_past_last() {
        let mut r = three();
        r.next();
        r.next();
        assert_eq!(r.index(), 2);
        assert_eq!(r.next(), View::Databases);
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn prev_wraps_past_first() {
        let mut r = three();
        assert_eq!(r.index(), 0);
        assert_eq!(r.prev(), View::TableIo);
        assert_eq!(r.index(), 2);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut r = ViewRotation::new(Vec::new());
        let start = r.current();
        for _ in 0..View::all().len() {
            r.next();
        }
        assert_eq!(r.current(), start);
    }

    #[test]
    fn empty_name_selects_default_view() {
        let mut r = ViewRotation::new(Vec::new());
        assert_eq!(r.set_by_name("").unwrap(), View::TableOps);
        assert_eq!(ViewRotation::default().current(), View::TableOps);

        let mut r = ViewRotation::new(vec![View::Slru, View::Users]);
        assert_eq!(r.set_by_name("").unwrap(), View::Slru);
    }

    #[test]
    fn set_by_name_jumps_directly() {
        let mut r = ViewRotation::default();
        assert_eq!(r.set_by_name("statements").unwrap(), View::Statements);
        assert_eq!(r.current(), View::Statements);
        assert_eq!(r.next(), View::Users);
    }

    #[test]
    fn unknown_name_lists_valid_views() {
        let mut r = three();
        r.next();
        let err = r.set_by_name("mutex").unwrap_err();
        assert_eq!(err.name, "mutex");
        assert_eq!(err.valid, vec!["databases", "table_ops", "table_io"]);
        assert!(err.to_string().contains("databases, table_ops, table_io"));
        // Failed lookups leave the selection alone.
        assert_eq!(r.index(), 1);
    }

    #[test]
    fn known_view_outside_rotation_is_rejected() {
        let mut r = three();
        assert!(r.set_by_name("slru").is_err());
    }
}
