//! Read-only / editable toggle for the profile form.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    ReadOnly,
    Editable,
}

/// Control states the page should reflect for a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAccess {
    pub fields_disabled: bool,
    pub edit_disabled: bool,
    pub save_disabled: bool,
}

impl FieldAccess {
    #[must_use]
    pub const fn for_mode(mode: EditMode) -> Self {
        match mode {
            EditMode::ReadOnly => Self {
                fields_disabled: true,
                edit_disabled: false,
                save_disabled: true,
            },
            EditMode::Editable => Self {
                fields_disabled: false,
                edit_disabled: true,
                save_disabled: false,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormEditToggle {
    mode: EditMode,
}

impl FormEditToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    #[must_use]
    pub const fn access(&self) -> FieldAccess {
        FieldAccess::for_mode(self.mode)
    }

    /// Enter editable mode. `None` when already editable.
    pub fn edit(&mut self) -> Option<FieldAccess> {
        self.transition(EditMode::ReadOnly, EditMode::Editable)
    }

    /// Leave editable mode. `None` when already read-only; otherwise the
    /// caller confirms the save to the user.
    pub fn save(&mut self) -> Option<FieldAccess> {
        self.transition(EditMode::Editable, EditMode::ReadOnly)
    }

    fn transition(&mut self, from: EditMode, to: EditMode) -> Option<FieldAccess> {
        if self.mode != from {
            return None;
        }
        self.mode = to;
        Some(FieldAccess::for_mode(to))
    }
}

/// Whether the edit toggle governs a field. The upload control never does.
#[must_use]
pub fn is_toggled_field(field_id: &str, upload_id: &str) -> bool {
    field_id != upload_id
}
