use crate::adapters::logging::LoggerKind;
use crate::config::preset::Preset;
use crate::utils::error::{EnderError, Result};
use crate::utils::validation::{validate_customer_key, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub default_preset: Preset,
    #[serde(default)]
    pub logger: LoggerKind,
    #[serde(default = "default_customers")]
    pub customers: BTreeMap<String, Preset>,
}

fn default_customers() -> BTreeMap<String, Preset> {
    let mut customers = BTreeMap::new();
    customers.insert("1".to_string(), Preset::for_customer(1));
    customers
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            default_preset: Preset::default(),
            logger: LoggerKind::default(),
            customers: default_customers(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 取得客戶對應的選擇器組合，未列出的客戶使用預設值
    pub fn preset_for(&self, customer_number: i32) -> Preset {
        self.customers
            .iter()
            .find(|(key, _)| key.trim().parse::<i32>().ok() == Some(customer_number))
            .map(|(_, preset)| *preset)
            .unwrap_or(self.default_preset)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let mut seen: BTreeMap<i32, &str> = BTreeMap::new();
        for key in self.customers.keys() {
            let customer_number = validate_customer_key("customers", key)?;
            if let Some(previous) = seen.insert(customer_number, key) {
                return Err(EnderError::ConfigValidationError {
                    field: "customers".to_string(),
                    message: format!(
                        "Keys '{}' and '{}' both map customer {}",
                        previous, key, customer_number
                    ),
                });
            }
        }
        Ok(())
    }
}
