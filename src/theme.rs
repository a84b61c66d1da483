//! Color lookup used to style console output.
//!
//! Output is annotated with `[color]` tags, e.g. `[red]Invalid parameters`.

/// Semantic color roles that can be resolved by a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// Errors and the "Do not disturb" status
    Error,
}

/// Maps semantic color roles to displayable color tokens.
#[derive(Debug, Clone)]
pub struct Theme {
    error_color: String,
}

impl Theme {
    pub fn new(error_color: &str) -> Self {
        Theme {
            error_color: error_color.to_owned(),
        }
    }

    /// Returns the color token of a role.
    pub fn color(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Error => &self.error_color,
        }
    }

    /// Returns the markup tag of a role, e.g. `[#ff0000]`.
    pub fn tag(&self, role: ColorRole) -> String {
        format!("[{}]", self.color(role))
    }
}
