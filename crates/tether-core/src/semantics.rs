/// High‑level semantic role of a node, mapped onto ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Button,
    Dialog,
    Tooltip,
    Presentation,
}

impl Role {
    pub fn as_aria(&self) -> &'static str {
        match self {
            Role::Button => "button",
            Role::Dialog => "dialog",
            Role::Tooltip => "tooltip",
            Role::Presentation => "presentation",
        }
    }
}

/// Accessibility attributes attached to a part, used by the host to set
/// `role` and `aria-*` on the rendered element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Semantics {
    pub role: Role,
    /// Element id of this node, when it must be referenced by others.
    pub id: Option<String>,
    /// `aria-haspopup`: role of the popup this node opens.
    pub has_popup: Option<Role>,
    /// `aria-expanded`
    pub expanded: Option<bool>,
    /// `aria-controls`
    pub controls: Option<String>,
    /// `aria-hidden`
    pub hidden: bool,
    pub disabled: bool,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            id: None,
            has_popup: None,
            expanded: None,
            controls: None,
            hidden: false,
            disabled: false,
        }
    }

    /// Attribute list in a stable order, ready to apply to an element.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![("role", self.role.as_aria().to_string())];
        if let Some(id) = &self.id {
            out.push(("id", id.clone()));
        }
        if let Some(p) = self.has_popup {
            out.push(("aria-haspopup", p.as_aria().to_string()));
        }
        if let Some(e) = self.expanded {
            out.push(("aria-expanded", e.to_string()));
        }
        if let Some(c) = &self.controls {
            out.push(("aria-controls", c.clone()));
        }
        if self.hidden {
            out.push(("aria-hidden", "true".to_string()));
        }
        if self.disabled {
            out.push(("aria-disabled", "true".to_string()));
        }
        out
    }
}
