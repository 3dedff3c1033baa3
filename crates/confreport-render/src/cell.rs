//! Structured row-of-cells representation produced by the transform and
//! consumed by the HTML layer.

/// An icon glyph, optionally wrapped in a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub class: String,
    pub title: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    Text(String),
    Link { href: String, text: String },
    Icons(Vec<Icon>),
    /// Text with a hover tooltip made of lines.
    WithTooltip { text: String, tooltip: Vec<String> },
    /// A collapsible summary/detail pair; detail lines are preformatted.
    Collapsible { summary: String, detail: Vec<String> },
}

/// One table cell with the widget's hidden sort and search values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub content: CellContent,
    /// `data-order`: what the widget sorts on instead of the content.
    pub order: Option<String>,
    /// `data-search`: what the widget filters on instead of the content.
    pub search: Option<String>,
}

impl Cell {
    pub fn new(content: CellContent) -> Self {
        Self {
            content,
            order: None,
            search: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(CellContent::Empty)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(CellContent::Text(text.into()))
    }

    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Table columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Docket,
    Type,
    Tags,
    LowerCourt,
    Case,
    Distribution,
    Action,
    Status,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Docket,
        Column::Type,
        Column::Tags,
        Column::LowerCourt,
        Column::Case,
        Column::Distribution,
        Column::Action,
        Column::Status,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Column::Docket => "Docket",
            Column::Type => "Type",
            Column::Tags => "Tags",
            Column::LowerCourt => "LC",
            Column::Case => "Case",
            Column::Distribution => "Dist",
            Column::Action => "Action",
            Column::Status => "Current Status",
        }
    }
}

/// A fully formatted table row for one docket.
#[derive(Debug, Clone, PartialEq)]
pub struct DocketRow {
    /// Status class key used for row coloring.
    pub class: String,
    pub docket: Cell,
    pub case_type: Cell,
    pub tags: Cell,
    pub lower_court: Cell,
    pub case_name: Cell,
    pub distribution: Cell,
    pub action: Cell,
    pub status: Cell,
}

impl DocketRow {
    /// Cells in [`Column::ALL`] order.
    pub fn cells(&self) -> [&Cell; 8] {
        [
            &self.docket,
            &self.case_type,
            &self.tags,
            &self.lower_court,
            &self.case_name,
            &self.distribution,
            &self.action,
            &self.status,
        ]
    }

    pub fn cell(&self, column: Column) -> &Cell {
        match column {
            Column::Docket => &self.docket,
            Column::Type => &self.case_type,
            Column::Tags => &self.tags,
            Column::LowerCourt => &self.lower_court,
            Column::Case => &self.case_name,
            Column::Distribution => &self.distribution,
            Column::Action => &self.action,
            Column::Status => &self.status,
        }
    }
}
