use crate::core::selection::{
    ActiveAndLocalCoursesSelector, ActiveAndLocalIssuancesSelector, ActiveCoursesSelector,
    ActiveIssuancesSelector,
};
use crate::core::{CourseSelector, IssuanceSelector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A matched pair of course and issuance selectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    ActiveOnly,
    ActiveAndLocal,
}

impl Preset {
    /// 內建的客戶對應規則：客戶 1 只處理本地資料，其餘客戶處理所有有效資料
    pub fn for_customer(customer_number: i32) -> Self {
        if customer_number == 1 {
            Preset::ActiveAndLocal
        } else {
            Preset::ActiveOnly
        }
    }

    pub fn course_selector(self) -> Box<dyn CourseSelector> {
        match self {
            Preset::ActiveOnly => Box::new(ActiveCoursesSelector),
            Preset::ActiveAndLocal => Box::new(ActiveAndLocalCoursesSelector),
        }
    }

    pub fn issuance_selector(self) -> Box<dyn IssuanceSelector> {
        match self {
            Preset::ActiveOnly => Box::new(ActiveIssuancesSelector),
            Preset::ActiveAndLocal => Box::new(ActiveAndLocalIssuancesSelector),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::ActiveOnly => "active-only",
            Preset::ActiveAndLocal => "active-and-local",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
