use std::sync::OnceLock;

use crate::assets::{PaletteTable, TAILWIND};
use crate::models::PaletteEntry;

/// Owner of the flattened reference palette.
///
/// The palette is built from its source table on first access and is
/// immutable afterwards. The build is guarded by a [`OnceLock`], so a store
/// can be shared across threads and concurrent first access still builds
/// exactly once.
#[derive(Debug)]
pub struct PaletteStore {
    table: PaletteTable,
    entries: OnceLock<Vec<PaletteEntry>>,
}

impl PaletteStore {
    /// Store backed by a static table, flattened lazily.
    pub fn new(table: PaletteTable) -> Self {
        Self {
            table,
            entries: OnceLock::new(),
        }
    }

    /// Store backed by the embedded Tailwind palette.
    pub fn tailwind() -> Self {
        Self::new(TAILWIND)
    }

    /// Store around an already flattened list of entries.
    ///
    /// Entries are used as given, including non-color sentinels.
    pub fn from_entries(entries: Vec<PaletteEntry>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(entries);
        Self {
            table: PaletteTable::EMPTY,
            entries: cell,
        }
    }

    /// The flattened palette, built on first call.
    pub fn palette(&self) -> &[PaletteEntry] {
        self.entries.get_or_init(|| {
            let entries = flatten(&self.table);
            tracing::info!(colors = entries.len(), "Loaded palette");
            entries
        })
    }

    /// First entry (in palette order) whose hex equals `hex`, ignoring case.
    pub fn find_exact_match(&self, hex: &str) -> Option<&PaletteEntry> {
        let normalized = hex.to_uppercase();
        self.palette().iter().find(|entry| entry.hex == normalized)
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.palette().iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.palette().len()
    }

    pub fn is_empty(&self) -> bool {
        self.palette().is_empty()
    }

    /// True once the palette has been built.
    pub fn is_loaded(&self) -> bool {
        self.entries.get().is_some()
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::tailwind()
    }
}

/// Flatten a table: basic colors first, then every family's shades in
/// table order. Shade values that are not hex colors are dropped.
fn flatten(table: &PaletteTable) -> Vec<PaletteEntry> {
    let mut entries = Vec::with_capacity(table.value_count());

    for (name, value) in table.basics {
        entries.push(PaletteEntry::new(*name, value));
    }

    for family in table.families {
        for (shade, value) in family.shades {
            if !value.starts_with('#') {
                tracing::debug!(family = family.name, shade, value, "Skipping non-hex shade");
                continue;
            }
            entries.push(PaletteEntry::new(format!("{}-{}", family.name, shade), value));
        }
    }

    entries
}
