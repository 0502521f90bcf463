//! Data structures for LegalTUI
//!
//! Read-only records shown by the screens, organized by domain:
//! - **Clients**: people and companies the firm represents
//! - **Processes**: legal cases and their lifecycle status
//! - **Tracking**: follow-up tasks attached to a case
//! - **Judicial houses**: directory of courts and tribunals

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unknown status label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} status: '{value}'")]
pub struct StatusParseError {
    pub kind: &'static str,
    pub value: String,
}

// =============================================================================
// Clients
// =============================================================================

/// A client of the firm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub case_count: u32,
    pub last_contact: String,
}

impl Client {
    /// Avatar placeholder letter when no avatar is set
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// First 8 characters of the identifier, as printed on cards
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> {} - {} casos",
            self.name, self.email, self.phone, self.case_count
        )
    }
}

// =============================================================================
// Legal Processes
// =============================================================================

/// Lifecycle status of a legal process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessStatus {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "En espera")]
    OnHold,
    #[serde(rename = "Urgente")]
    Urgent,
    #[serde(rename = "Archivado")]
    Archived,
}

impl ProcessStatus {
    pub const ALL: [ProcessStatus; 4] = [
        ProcessStatus::Active,
        ProcessStatus::OnHold,
        ProcessStatus::Urgent,
        ProcessStatus::Archived,
    ];

    /// Label shown in the status badge
    pub fn label(&self) -> &'static str {
        match self {
            ProcessStatus::Active => "Activo",
            ProcessStatus::OnHold => "En espera",
            ProcessStatus::Urgent => "Urgente",
            ProcessStatus::Archived => "Archivado",
        }
    }

    pub fn is_archived(&self) -> bool {
        matches!(self, ProcessStatus::Archived)
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProcessStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProcessStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatusParseError {
                kind: "process",
                value: s.to_string(),
            })
    }
}

/// A legal case handled by the firm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalProcess {
    pub id: String,
    pub title: String,
    pub case_number: String,
    pub client: String,
    pub status: ProcessStatus,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_date: String,
    pub next_hearing: Option<String>,
    pub last_update: String,
}

impl fmt::Display for LegalProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} - {} ({})",
            self.case_number, self.status, self.title, self.client, self.kind
        )
    }
}

// =============================================================================
// Tracking
// =============================================================================

/// Status of a tracking task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingStatus {
    #[default]
    Pending,
    Urgent,
    Completed,
}

impl TrackingStatus {
    pub const ALL: [TrackingStatus; 3] = [
        TrackingStatus::Pending,
        TrackingStatus::Urgent,
        TrackingStatus::Completed,
    ];

    /// Wire identifier (`pending`, `urgent`, `completed`)
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStatus::Pending => "pending",
            TrackingStatus::Urgent => "urgent",
            TrackingStatus::Completed => "completed",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            TrackingStatus::Pending => "Pendiente",
            TrackingStatus::Urgent => "Urgente",
            TrackingStatus::Completed => "Completo",
        }
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrackingStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackingStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatusParseError {
                kind: "tracking",
                value: s.to_string(),
            })
    }
}

/// Follow-up task for a case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingItem {
    pub id: String,
    pub title: String,
    pub case_number: String,
    pub description: String,
    pub status: TrackingStatus,
    pub due_date: String,
}

impl fmt::Display for TrackingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} - vence {}",
            self.case_number, self.status, self.title, self.due_date
        )
    }
}

// =============================================================================
// Judicial Houses
// =============================================================================

/// Court or tribunal directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudicialHouse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub hours: String,
    pub website: String,
}

impl fmt::Display for JudicialHouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}, {}",
            self.name, self.kind, self.address, self.city
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, name: &str) -> Client {
        Client {
            id: id.into(),
            name: name.into(),
            email: "x@y.com".into(),
            phone: "555".into(),
            avatar: None,
            case_count: 1,
            last_contact: "2024-01-01".into(),
        }
    }

    #[test]
    fn test_client_short_id() {
        let c = client("8f2c1a7e-1111-2222-3333-444455556666", "Ana");
        assert_eq!(c.short_id(), "8f2c1a7e");

        let c = client("42", "Ana");
        assert_eq!(c.short_id(), "42");
    }

    #[test]
    fn test_client_initial() {
        assert_eq!(client("1", "Óscar Ruiz").initial(), 'Ó');
        assert_eq!(client("1", "").initial(), '?');
    }

    #[test]
    fn test_process_status_parse() {
        assert_eq!("Activo".parse::<ProcessStatus>(), Ok(ProcessStatus::Active));
        assert_eq!("en espera".parse::<ProcessStatus>(), Ok(ProcessStatus::OnHold));
        assert_eq!("ARCHIVADO".parse::<ProcessStatus>(), Ok(ProcessStatus::Archived));

        let err = "Cerrado".parse::<ProcessStatus>().unwrap_err();
        assert_eq!(err.kind, "process");
        assert_eq!(err.value, "Cerrado");
    }

    #[test]
    fn test_process_status_serde_uses_labels() {
        let json = serde_json::to_string(&ProcessStatus::OnHold).unwrap();
        assert_eq!(json, "\"En espera\"");

        let status: ProcessStatus = serde_json::from_str("\"Urgente\"").unwrap();
        assert_eq!(status, ProcessStatus::Urgent);

        assert!(serde_json::from_str::<ProcessStatus>("\"Cerrado\"").is_err());
    }

    #[test]
    fn test_tracking_status_parse() {
        assert_eq!("pending".parse::<TrackingStatus>(), Ok(TrackingStatus::Pending));
        assert_eq!("Completed".parse::<TrackingStatus>(), Ok(TrackingStatus::Completed));
        assert!("done".parse::<TrackingStatus>().is_err());
    }

    #[test]
    fn test_legal_process_json_shape() {
        let process = LegalProcess {
            id: "p1".into(),
            title: "Divorcio".into(),
            case_number: "EXP-1".into(),
            client: "Ana".into(),
            status: ProcessStatus::Active,
            kind: "Familia".into(),
            start_date: "2024-01-01".into(),
            next_hearing: None,
            last_update: "2024-02-01".into(),
        };
        let value = serde_json::to_value(&process).unwrap();
        assert_eq!(value["caseNumber"], "EXP-1");
        assert_eq!(value["type"], "Familia");
        assert_eq!(value["status"], "Activo");
        assert!(value["nextHearing"].is_null());
    }
}
