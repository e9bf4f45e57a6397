//! UIKit element classification for page-object emission.

pub const BUTTON: &str = "UIButton";
pub const IMAGE_VIEW: &str = "UIImageView";
pub const TEXT_FIELD: &str = "UITextField";
pub const TEXT_VIEW: &str = "UITextView";
pub const LABEL: &str = "UILabel";
pub const COLLECTION_VIEW: &str = "UICollectionView";
pub const TABLE_VIEW: &str = "UITableView";
pub const SCROLL_VIEW: &str = "UIScrollView";
pub const SWITCH: &str = "UISwitch";

/// Outlets of this type are never wired.
pub const LAYOUT_CONSTRAINT: &str = "NSLayoutConstraint";

/// Search bars expose a nested text field that gets its own identifier.
pub const SEARCH_BAR: &str = "UISearchBar";

/// Type of the synthetic outlet standing for a controller's root view.
pub const ROOT_VIEW: &str = "MainView";

/// Kind of element an outlet resolves to in a UI test query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Image,
    TextField,
    TextView,
    StaticText,
    Collection,
    Table,
    ScrollView,
    Switch,
    /// Branded call-to-action button looked up by element type and identifier.
    ProminentButton,
    Other,
}

impl ElementKind {
    /// Map a declared outlet type. `prominent` names the branded button type
    /// recognised by the active policy, if any.
    pub fn from_type(type_name: &str, prominent: Option<&str>) -> Self {
        match type_name {
            BUTTON => ElementKind::Button,
            IMAGE_VIEW => ElementKind::Image,
            TEXT_FIELD => ElementKind::TextField,
            TEXT_VIEW => ElementKind::TextView,
            LABEL => ElementKind::StaticText,
            COLLECTION_VIEW => ElementKind::Collection,
            TABLE_VIEW => ElementKind::Table,
            SCROLL_VIEW => ElementKind::ScrollView,
            SWITCH => ElementKind::Switch,
            other if Some(other) == prominent => ElementKind::ProminentButton,
            _ => ElementKind::Other,
        }
    }

    /// Element constructor name used by inline page objects.
    pub fn case_name(self) -> &'static str {
        match self {
            ElementKind::Button | ElementKind::ProminentButton => "button",
            ElementKind::Image => "image",
            ElementKind::TextField => "textField",
            ElementKind::TextView => "textView",
            ElementKind::StaticText => "staticText",
            ElementKind::Collection => "collection",
            ElementKind::Table => "table",
            ElementKind::ScrollView => "scrollView",
            ElementKind::Switch => "switches",
            ElementKind::Other => "otherElement",
        }
    }

    /// `XCUIElementQuery` accessor the element is looked up under.
    pub fn query(self) -> &'static str {
        match self {
            ElementKind::Button | ElementKind::ProminentButton => "buttons",
            ElementKind::Image => "images",
            ElementKind::TextField => "textFields",
            ElementKind::TextView => "textViews",
            ElementKind::StaticText => "staticTexts",
            ElementKind::Collection => "collectionViews",
            ElementKind::Table => "tables",
            ElementKind::ScrollView => "scrollViews",
            ElementKind::Switch => "switches",
            ElementKind::Other => "otherElements",
        }
    }

    /// Buttons get a generated tap action.
    pub fn is_tappable(self) -> bool {
        matches!(self, ElementKind::Button | ElementKind::ProminentButton)
    }
}

pub fn is_layout_constraint(type_name: &str) -> bool {
    type_name == LAYOUT_CONSTRAINT
}

pub fn is_search_bar(type_name: &str) -> bool {
    type_name == SEARCH_BAR
}

pub fn is_root_view(type_name: &str) -> bool {
    type_name == ROOT_VIEW
}
