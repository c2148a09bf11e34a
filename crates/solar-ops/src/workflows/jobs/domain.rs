use serde::{Deserialize, Serialize};

/// Customer category a job is booked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Residential,
    Commercial,
    Industrial,
}

impl Segment {
    pub const fn ordered() -> [Self; 3] {
        [Self::Residential, Self::Commercial, Self::Industrial]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Residential => "RES",
            Self::Commercial => "COM",
            Self::Industrial => "IND",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|segment| segment.code() == code)
    }
}

/// Service line offered by the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceLine {
    EnergyAudit,
    SystemDesign,
    Epc,
    Installation,
    Maintenance,
    Consulting,
    Financing,
    Monitoring,
    EnergyStorage,
    EvCharging,
    Training,
}

impl ServiceLine {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::EnergyAudit,
            Self::SystemDesign,
            Self::Epc,
            Self::Installation,
            Self::Maintenance,
            Self::Consulting,
            Self::Financing,
            Self::Monitoring,
            Self::EnergyStorage,
            Self::EvCharging,
            Self::Training,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::EnergyAudit => "AUD",
            Self::SystemDesign => "DES",
            Self::Epc => "EPC",
            Self::Installation => "INS",
            Self::Maintenance => "MNT",
            Self::Consulting => "CON",
            Self::Financing => "FIN",
            Self::Monitoring => "MON",
            Self::EnergyStorage => "STO",
            Self::EvCharging => "EVC",
            Self::Training => "TRN",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EnergyAudit => "Energy Audit",
            Self::SystemDesign => "System Design",
            Self::Epc => "Engineering, Procurement, Construction",
            Self::Installation => "Installation",
            Self::Maintenance => "Operations & Maintenance",
            Self::Consulting => "Consulting",
            Self::Financing => "Financing",
            Self::Monitoring => "Performance Monitoring",
            Self::EnergyStorage => "Energy Storage",
            Self::EvCharging => "EV Charging",
            Self::Training => "Technical Training",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|service| service.code() == code)
    }
}

/// Delivery status tracked independently of the job code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    Completed,
    OnHold,
    Cancelled,
}

impl JobStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Active, Self::Completed, Self::OnHold, Self::Cancelled]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Badge color the admin screens render the status with.
    pub const fn badge_color(self) -> &'static str {
        match self {
            Self::Active => "green",
            Self::Completed => "blue",
            Self::OnHold => "amber",
            Self::Cancelled => "red",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
    }
}
