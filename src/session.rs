//! Editing Session State
//!
//! Per-document state owned by one open editing context: the registered
//! fields, the original values captured when the record was loaded, the
//! record-level automation switch, and the per-field prompt suppression set.
//! Nothing here is shared between concurrently open documents.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::AutomationFlag;
use crate::host::RecordHost;
use crate::text::NormalizationPolicy;

/// One formatted field, as registered by the per-record-type glue.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub field_id: String,
    /// Automation flag gating this field's formatting.
    pub flag: AutomationFlag,
    pub policy: NormalizationPolicy,
}

impl FieldSpec {
    pub fn new(
        field_id: impl Into<String>,
        flag: AutomationFlag,
        policy: NormalizationPolicy,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            flag,
            policy,
        }
    }
}

/// A field's load-time value paired with its live value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub field_id: String,
    pub original_value: String,
    pub current_value: String,
}

/// State for one load→save cycle of one open record.
pub struct EditingSession {
    fields: Vec<FieldSpec>,
    /// Original values, fixed from load until the next reload/new record.
    originals: IndexMap<String, String>,
    /// Fields that already produced a user decision this session.
    suppressed: HashSet<String>,
    /// Record-level automation switch (`custom_automate`); new records
    /// start with it on.
    automation_enabled: bool,
}

impl EditingSession {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            originals: IndexMap::new(),
            suppressed: HashSet::new(),
            automation_enabled: true,
        }
    }

    /// Capture original values from the host and clear the suppression set.
    ///
    /// Called on load, and again after every reload or new-record switch.
    pub fn capture_originals(&mut self, record: &dyn RecordHost) {
        self.originals.clear();
        self.suppressed.clear();
        for field in &self.fields {
            if let Some(value) = record.field_value(&field.field_id) {
                self.originals.insert(field.field_id.clone(), value);
            }
        }
        log::debug!("Captured {} original field values", self.originals.len());
    }

    /// Registered fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.field_id == field_id)
    }

    /// The value this field had when the session started, if it had one.
    pub fn original_value(&self, field_id: &str) -> Option<&str> {
        self.originals.get(field_id).map(String::as_str)
    }

    /// Pair every captured original with the field's live value.
    pub fn snapshots(&self, record: &dyn RecordHost) -> Vec<FieldSnapshot> {
        self.originals
            .iter()
            .map(|(field_id, original)| FieldSnapshot {
                field_id: field_id.clone(),
                original_value: original.clone(),
                current_value: record.field_value(field_id).unwrap_or_default(),
            })
            .collect()
    }

    pub fn is_suppressed(&self, field_id: &str) -> bool {
        self.suppressed.contains(field_id)
    }

    /// Stop prompting for this field until the session resets.
    pub fn suppress(&mut self, field_id: &str) {
        self.suppressed.insert(field_id.to_string());
    }

    pub fn automation_enabled(&self) -> bool {
        self.automation_enabled
    }

    pub fn set_automation_enabled(&mut self, enabled: bool) {
        self.automation_enabled = enabled;
    }
}
