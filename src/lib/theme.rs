//! Shared Tailwind class constants to keep the panels visually consistent.

pub struct Theme;

impl Theme {
    /// White card wrapping each panel.
    pub const CARD: &'static str = "bg-white rounded-lg shadow-md p-6";

    /// Panel heading.
    pub const HEADING: &'static str = "text-2xl font-semibold mb-6";

    /// Section heading inside the profile panel.
    pub const SECTION: &'static str = "text-lg font-medium mb-4";

    /// Form field label.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-700";

    /// Text, date, and select inputs.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5";

    /// Key in a label/value row.
    pub const ROW_KEY: &'static str = "font-medium text-gray-700";

    /// Monospace box for token previews.
    pub const TOKEN_BOX: &'static str = "mt-1 p-2 bg-gray-100 rounded text-xs font-mono break-all";
}
