use fieldpay_model::Field;

/// Resolved column index per logical field.
///
/// A field with no matching header cell stays unmapped and reads as the
/// empty string everywhere, so downstream code never branches on presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    slots: [Option<usize>; Field::ALL.len()],
}

impl ColumnMap {
    pub fn set(&mut self, field: Field, index: usize) {
        self.slots[field as usize] = Some(index);
    }

    pub fn get(&self, field: Field) -> Option<usize> {
        self.slots[field as usize]
    }

    pub fn is_mapped(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Cell value for `field` in `row`. Unmapped fields and indices past the
    /// end of a short row both read as the empty string.
    pub fn cell<'a>(&self, row: &'a [String], field: Field) -> &'a str {
        self.get(field)
            .and_then(|index| row.get(index))
            .map_or("", String::as_str)
    }

    pub fn mapped_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
