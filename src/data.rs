//! Mock dataset
//!
//! Static fixtures standing in for a real data source. Built once per
//! process and shared read-only by every screen and CLI command.

use std::collections::HashSet;
use std::sync::OnceLock;

use thiserror::Error;

use crate::models::{
    Client, JudicialHouse, LegalProcess, ProcessStatus, TrackingItem, TrackingStatus,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Duplicate {list} id: '{id}'")]
    DuplicateId { list: &'static str, id: String },
}

/// All record lists the application displays
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub clients: Vec<Client>,
    pub processes: Vec<LegalProcess>,
    pub tracking: Vec<TrackingItem>,
    pub houses: Vec<JudicialHouse>,
}

static MOCK: OnceLock<Dataset> = OnceLock::new();

impl Dataset {
    /// The process-wide mock dataset
    pub fn mock() -> &'static Dataset {
        MOCK.get_or_init(|| Dataset {
            clients: mock_clients(),
            processes: mock_processes(),
            tracking: mock_tracking(),
            houses: mock_houses(),
        })
    }

    /// Check that identifiers are unique within each list
    pub fn validate(&self) -> Result<(), DataError> {
        unique_ids("clients", self.clients.iter().map(|c| c.id.as_str()))?;
        unique_ids("processes", self.processes.iter().map(|p| p.id.as_str()))?;
        unique_ids("tracking", self.tracking.iter().map(|t| t.id.as_str()))?;
        unique_ids("houses", self.houses.iter().map(|h| h.id.as_str()))?;
        Ok(())
    }

    /// Processes that are not archived
    pub fn active_process_count(&self) -> usize {
        self.processes
            .iter()
            .filter(|p| !p.status.is_archived())
            .count()
    }

    pub fn tracking_count(&self, status: TrackingStatus) -> usize {
        self.tracking.iter().filter(|t| t.status == status).count()
    }
}

fn unique_ids<'a>(
    list: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId {
                list,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Fixtures
// =============================================================================

fn client(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    case_count: u32,
    last_contact: &str,
) -> Client {
    Client {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        avatar: None,
        case_count,
        last_contact: last_contact.into(),
    }
}

#[rustfmt::skip]
fn mock_clients() -> Vec<Client> {
    vec![
        client("3f1a9c2e-7b4d-4e8a-9c1f-2d6b8e0a4c11", "Maria Garcia", "mgarcia@correo.com", "+34 612 345 678", 3, "12/05/2024"),
        client("a82d4f61-0c3e-4b9a-8f27-5e1c9d3b7a22", "Juan Lopez", "jlopez@correo.com", "+34 623 456 789", 1, "08/05/2024"),
        client("c5e7b913-2a4f-4d6c-b081-9f3e5a7c1b33", "Carmen Rodriguez", "crodriguez@empresa.es", "+34 634 567 890", 2, "02/05/2024"),
        client("17b9d3a5-6e8c-4f0b-a2d4-7c9e1b3f5d44", "Antonio Martinez", "amartinez@correo.com", "+34 645 678 901", 4, "28/04/2024"),
        client("e4c2a6f8-1d3b-4a5e-9f71-3b5d7f9a1c55", "Lucia Fernandez", "lfernandez@bufete.es", "+34 656 789 012", 1, "25/04/2024"),
        client("9d1f3b5e-7a9c-4e2b-8d46-1f3a5c7e9b66", "Construcciones Norte S.L.", "contacto@cnorte.es", "+34 915 234 567", 5, "22/04/2024"),
        client("2b4d6f8a-0c1e-4a3b-9e57-8a0c2e4b6d77", "Pedro Sanchez", "psanchez@correo.com", "+34 667 890 123", 2, "18/04/2024"),
        client("f6a8c0e2-4b5d-4f7a-8c93-0e2b4d6f8a88", "Isabel Moreno", "imoreno@correo.com", "+34 678 901 234", 1, "15/04/2024"),
        client("5c7e9a1b-3d5f-4b8c-a0e2-4f6a8c0e2b99", "Distribuciones Sur S.A.", "legal@dsur.com", "+34 954 321 098", 3, "10/04/2024"),
        client("8e0a2c4d-6f7b-4d9e-b1c3-5a7c9e1b3daa", "Javier Ruiz", "jruiz@correo.com", "+34 689 012 345", 1, "05/04/2024"),
        client("b3d5f7a9-1c2e-4f4a-9b6d-8e0a2c4e6fbb", "Elena Jimenez", "ejimenez@correo.com", "+34 690 123 456", 2, "01/04/2024"),
        client("0a2c4e6f-8b9d-4b1c-8e3f-6b8d0f2a4ccc", "Miguel Alvarez", "malvarez@correo.com", "+34 601 234 567", 1, "28/03/2024"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn process(
    id: &str,
    title: &str,
    case_number: &str,
    client: &str,
    status: ProcessStatus,
    kind: &str,
    start_date: &str,
    next_hearing: Option<&str>,
    last_update: &str,
) -> LegalProcess {
    LegalProcess {
        id: id.into(),
        title: title.into(),
        case_number: case_number.into(),
        client: client.into(),
        status,
        kind: kind.into(),
        start_date: start_date.into(),
        next_hearing: next_hearing.map(Into::into),
        last_update: last_update.into(),
    }
}

#[rustfmt::skip]
fn mock_processes() -> Vec<LegalProcess> {
    use ProcessStatus::*;
    vec![
        process("p-001", "Divorcio de mutuo acuerdo", "EXP-2024-0142", "Maria Garcia", Active, "Familia", "15/01/2024", Some("20/06/2024"), "10/05/2024"),
        process("p-002", "Reclamacion de cantidad", "EXP-2024-0098", "Construcciones Norte S.L.", Urgent, "Civil", "03/02/2024", Some("28/05/2024"), "12/05/2024"),
        process("p-003", "Despido improcedente", "EXP-2024-0211", "Juan Lopez", OnHold, "Laboral", "20/02/2024", None, "02/05/2024"),
        process("p-004", "Herencia y particion de bienes", "EXP-2023-0876", "Carmen Rodriguez", Active, "Sucesiones", "11/09/2023", Some("14/07/2024"), "30/04/2024"),
        process("p-005", "Incumplimiento de contrato", "EXP-2024-0305", "Distribuciones Sur S.A.", Active, "Mercantil", "05/03/2024", Some("03/06/2024"), "08/05/2024"),
        process("p-006", "Accidente de trafico", "EXP-2023-0654", "Antonio Martinez", Urgent, "Civil", "22/06/2023", Some("24/05/2024"), "11/05/2024"),
        process("p-007", "Custodia compartida", "EXP-2022-0433", "Lucia Fernandez", Archived, "Familia", "14/04/2022", None, "19/12/2023"),
        process("p-008", "Desahucio por impago", "EXP-2023-0120", "Pedro Sanchez", Archived, "Civil", "09/01/2023", None, "02/11/2023"),
        process("p-009", "Recurso de multa administrativa", "EXP-2024-0377", "Antonio Martinez", OnHold, "Administrativo", "18/03/2024", None, "25/04/2024"),
        process("p-010", "Liquidacion de sociedad", "EXP-2021-0988", "Construcciones Norte S.L.", Archived, "Mercantil", "30/11/2021", None, "15/06/2023"),
    ]
}

fn tracking(
    id: &str,
    title: &str,
    case_number: &str,
    description: &str,
    status: TrackingStatus,
    due_date: &str,
) -> TrackingItem {
    TrackingItem {
        id: id.into(),
        title: title.into(),
        case_number: case_number.into(),
        description: description.into(),
        status,
        due_date: due_date.into(),
    }
}

#[rustfmt::skip]
fn mock_tracking() -> Vec<TrackingItem> {
    use TrackingStatus::*;
    vec![
        tracking("t-001", "Presentar convenio regulador", "EXP-2024-0142", "Redactar y presentar el convenio firmado por ambas partes.", Pending, "24/05/2024"),
        tracking("t-002", "Contestar demanda", "EXP-2024-0098", "Plazo de 20 dias habiles para contestar la demanda.", Urgent, "21/05/2024"),
        tracking("t-003", "Solicitar informe de vida laboral", "EXP-2024-0211", "Pedir el informe actualizado a la Seguridad Social.", Pending, "31/05/2024"),
        tracking("t-004", "Inventario de bienes", "EXP-2023-0876", "Completar el inventario de la herencia con la tasacion.", Pending, "15/06/2024"),
        tracking("t-005", "Aportar pruebas periciales", "EXP-2023-0654", "Entregar el informe pericial medico al juzgado.", Urgent, "22/05/2024"),
        tracking("t-006", "Requerimiento extrajudicial", "EXP-2024-0305", "Enviar burofax de requerimiento de pago.", Completed, "02/04/2024"),
        tracking("t-007", "Reunion con cliente", "EXP-2024-0377", "Revisar alegaciones del recurso con el cliente.", Pending, "29/05/2024"),
        tracking("t-008", "Archivo de expediente", "EXP-2022-0433", "Cerrar expediente y devolver documentacion original.", Completed, "18/12/2023"),
        tracking("t-009", "Pago de tasas judiciales", "EXP-2024-0098", "Abonar tasas y adjuntar justificante.", Completed, "10/03/2024"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn house(
    id: &str,
    name: &str,
    kind: &str,
    address: &str,
    city: &str,
    phone: &str,
    hours: &str,
    website: &str,
) -> JudicialHouse {
    JudicialHouse {
        id: id.into(),
        name: name.into(),
        kind: kind.into(),
        address: address.into(),
        city: city.into(),
        phone: phone.into(),
        hours: hours.into(),
        website: website.into(),
    }
}

#[rustfmt::skip]
fn mock_houses() -> Vec<JudicialHouse> {
    vec![
        house("h-001", "Juzgado de Primera Instancia n.5", "Civil", "Calle de Capitan Haya 66", "Madrid", "+34 914 931 000", "L-V 9:00-14:00", "https://www.poderjudicial.es"),
        house("h-002", "Juzgado de lo Social n.12", "Laboral", "Calle Princesa 3", "Madrid", "+34 914 930 500", "L-V 9:00-14:00", "https://www.poderjudicial.es"),
        house("h-003", "Audiencia Provincial", "Penal", "Calle Ferraz 41", "Madrid", "+34 914 931 200", "L-V 8:30-15:00", "https://www.poderjudicial.es"),
        house("h-004", "Ciudad de la Justicia", "Mixto", "Gran Via de les Corts Catalanes 111", "Barcelona", "+34 935 548 000", "L-V 9:00-14:30", "https://www.justicia.gencat.cat"),
        house("h-005", "Juzgado de Familia n.7", "Familia", "Avenida de la Buhaira 26", "Sevilla", "+34 955 005 000", "L-V 9:00-14:00", "https://www.juntadeandalucia.es"),
        house("h-006", "Tribunal Superior de Justicia", "Contencioso", "Plaza de la Justicia 1", "Valencia", "+34 961 927 000", "L-V 9:00-14:00", "https://www.poderjudicial.es"),
    ]
}
