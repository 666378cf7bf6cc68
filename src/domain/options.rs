//! Parser policy switches.

/// What to do when a `[section]` header repeats a name already seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateSections {
    /// Fail the load with [`IniError::DuplicateSection`](crate::IniError::DuplicateSection).
    #[default]
    Reject,
    /// Start the section over, discarding fields from the earlier definition.
    Replace,
}

/// What to do with a `key=value` line that precedes every section header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanFields {
    /// Fail the load with [`IniError::FieldOutsideSection`](crate::IniError::FieldOutsideSection).
    #[default]
    Reject,
    /// Collect such fields into a section named `""`.
    DefaultSection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub duplicate_sections: DuplicateSections,
    pub orphan_fields: OrphanFields,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicate_sections(mut self, policy: DuplicateSections) -> Self {
        self.duplicate_sections = policy;
        self
    }

    pub fn orphan_fields(mut self, policy: OrphanFields) -> Self {
        self.orphan_fields = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let options = ParseOptions::default();
        assert_eq!(options.duplicate_sections, DuplicateSections::Reject);
        assert_eq!(options.orphan_fields, OrphanFields::Reject);
    }

    #[test]
    fn builder_sets_policies() {
        let options = ParseOptions::new()
            .duplicate_sections(DuplicateSections::Replace)
            .orphan_fields(OrphanFields::DefaultSection);
        assert_eq!(options.duplicate_sections, DuplicateSections::Replace);
        assert_eq!(options.orphan_fields, OrphanFields::DefaultSection);
    }
}
