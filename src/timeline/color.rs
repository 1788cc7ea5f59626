use crate::model::Category;

/// Color bucket assigned to a category by its list position.
///
/// Emerald is last so that category colors rarely collide with the green
/// used for "completed" elsewhere in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorBucket {
    Amber,
    #[default]
    Blue,
    Indigo,
    Purple,
    Rose,
    Emerald,
}

impl ColorBucket {
    pub const ALL: [ColorBucket; 6] = [
        ColorBucket::Amber,
        ColorBucket::Blue,
        ColorBucket::Indigo,
        ColorBucket::Purple,
        ColorBucket::Rose,
        ColorBucket::Emerald,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorBucket::Amber => "amber",
            ColorBucket::Blue => "blue",
            ColorBucket::Indigo => "indigo",
            ColorBucket::Purple => "purple",
            ColorBucket::Rose => "rose",
            ColorBucket::Emerald => "emerald",
        }
    }
}

/// Bucket for a category name; unknown names are blue.
pub fn color_for(name: &str, categories: &[Category]) -> ColorBucket {
    categories
        .iter()
        .position(|c| c.name == name)
        .map(ColorBucket::from_index)
        .unwrap_or_default()
}
