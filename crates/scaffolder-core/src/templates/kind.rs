//! The five kinds of generated file

/// Which template a generated file is rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    List,
    Form,
    Details,
    Edit,
    Slice,
}

impl TemplateKind {
    /// Every kind, in the order files are written
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::List,
        TemplateKind::Form,
        TemplateKind::Details,
        TemplateKind::Edit,
        TemplateKind::Slice,
    ];

    /// Identifier suffix for view components, `None` for the slice
    pub fn view_suffix(&self) -> Option<&'static str> {
        match self {
            TemplateKind::List => Some("List"),
            TemplateKind::Form => Some("Form"),
            TemplateKind::Details => Some("Details"),
            TemplateKind::Edit => Some("Edit"),
            TemplateKind::Slice => None,
        }
    }

    pub fn is_view(&self) -> bool {
        self.view_suffix().is_some()
    }
}
