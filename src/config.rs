//! Engine Configuration
//!
//! Typed configuration for the formatting engine. The host application's
//! "automation settings" record is modelled as an explicit struct of named
//! boolean flags rather than a duck-typed bag of string-keyed fields, and it
//! is fetched in one batched read through [`crate::host::SettingsSource`].

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A named automation toggle, one per record kind the host formats.
///
/// Each form field registered with the engine names the flag that gates its
/// formatting; the flag is resolved locally against a fetched
/// [`AutomationSettings`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutomationFlag {
    Address,
    ContactName,
    CustomerName,
    SupplierName,
    EmployeeName,
    ItemName,
    CustomerGroup,
    SupplierGroup,
    ItemGroup,
    Brand,
    BankAccount,
}

/// Snapshot of every recognized automation flag.
///
/// Unknown flags cannot exist by construction; a missing settings record is
/// represented by [`AutomationSettings::default`], which disables everything
/// (no formatting when configuration is unavailable).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationSettings {
    pub enable_address_automation: bool,
    pub enable_contact_name_automation: bool,
    pub enable_customer_name_automation: bool,
    pub enable_supplier_name_automation: bool,
    pub enable_employee_name_automation: bool,
    pub enable_item_name_automation: bool,
    pub enable_customer_group_automation: bool,
    pub enable_supplier_group_automation: bool,
    pub enable_item_group_automation: bool,
    pub enable_brand_automation: bool,
    pub enable_bank_automation: bool,
}

impl AutomationSettings {
    /// Resolve a single flag against this snapshot.
    pub fn is_enabled(&self, flag: AutomationFlag) -> bool {
        match flag {
            AutomationFlag::Address => self.enable_address_automation,
            AutomationFlag::ContactName => self.enable_contact_name_automation,
            AutomationFlag::CustomerName => self.enable_customer_name_automation,
            AutomationFlag::SupplierName => self.enable_supplier_name_automation,
            AutomationFlag::EmployeeName => self.enable_employee_name_automation,
            AutomationFlag::ItemName => self.enable_item_name_automation,
            AutomationFlag::CustomerGroup => self.enable_customer_group_automation,
            AutomationFlag::SupplierGroup => self.enable_supplier_group_automation,
            AutomationFlag::ItemGroup => self.enable_item_group_automation,
            AutomationFlag::Brand => self.enable_brand_automation,
            AutomationFlag::BankAccount => self.enable_bank_automation,
        }
    }

    /// Snapshot with every flag switched on. Convenient for glue code and tests.
    pub fn all_enabled() -> Self {
        Self {
            enable_address_automation: true,
            enable_contact_name_automation: true,
            enable_customer_name_automation: true,
            enable_supplier_name_automation: true,
            enable_employee_name_automation: true,
            enable_item_name_automation: true,
            enable_customer_group_automation: true,
            enable_supplier_group_automation: true,
            enable_item_group_automation: true,
            enable_brand_automation: true,
            enable_bank_automation: true,
        }
    }
}

/// Engine-level tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Quiet period before the full formatting pass runs, in milliseconds.
    pub debounce_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_delay_ms: 300,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn from_toml_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded engine config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse engine config at {}: {e} — using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("No engine config at {} — using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Debounce delay as a [`std::time::Duration`].
    pub fn debounce_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_delay_ms)
    }
}
