use crate::ui::primitives::text::{ColoredText, SemanticColor};
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Selected,
    Unselected,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Selected) => theme::icons::SELECTED,
            (true, Icon::Unselected) => theme::icons::UNSELECTED,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Selected) => theme::icons_ascii::SELECTED,
            (false, Icon::Unselected) => theme::icons_ascii::UNSELECTED,
        }
    }

    pub fn semantic_color(&self) -> SemanticColor {
        match self {
            Icon::Success | Icon::Selected => SemanticColor::Success,
            Icon::Error => SemanticColor::Error,
            Icon::Warning => SemanticColor::Warning,
            Icon::Pending | Icon::Unselected => SemanticColor::Dim,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        ColoredText::colored(self.render(supports_unicode), self.semantic_color())
            .render(supports_color)
    }
}
