//! Tipos del módulo de estadísticas de mantención
//!
//! Los structs `*Row` reflejan la forma de las filas que devuelve la base;
//! los tipos de respuesta definen el contrato JSON que consume el
//! dashboard. El mapeo entre ambos vive en `services::stats_service`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Filas crudas
// ---------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct EventoCalendarioRow {
    pub fecha: NaiveDate,
    pub codigo: String,
    pub estado: String,
    pub empresa: String,
}

/// Una fila por mes con actividad; los meses sin registros no vienen
#[derive(Debug, FromRow)]
pub struct TendenciaMesRow {
    /// Clave "YYYY-MM" usada para cuadrar contra la ventana de 6 meses
    pub mes: String,
    pub preventivas: i64,
    pub correctivas: i64,
    pub emergencias: i64,
    pub total: i64,
    pub costos: f64,
}

#[derive(Debug, FromRow)]
pub struct MaquinasDisponiblesRow {
    pub disponibles: i64,
    pub total: i64,
}

#[derive(Debug, FromRow)]
pub struct OrdenesMesRow {
    pub en_proceso: i64,
    pub completadas: i64,
}

#[derive(Debug, FromRow)]
pub struct CostosMesRow {
    pub mes_actual: f64,
    pub mes_anterior: f64,
}

#[derive(Debug, FromRow)]
pub struct EmpresaConteoRow {
    pub nombre: String,
    pub cantidad: i64,
}

#[derive(Debug, FromRow)]
pub struct HistorialRow {
    pub id: i32,
    pub fecha: NaiveDate,
    pub vehiculo: String,
    pub tipo: String,
    pub estado: String,
    pub empresa: String,
    pub costos: f64,
}

// ---------------------------------------------------------------------------
// Contrato JSON
// ---------------------------------------------------------------------------

/// Estado visual de un evento en el calendario del frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoCalendario {
    Completed,
    Overdue,
    Scheduled,
}

#[derive(Debug, Serialize)]
pub struct EventoCalendario {
    pub date: NaiveDate,
    pub title: String,
    pub status: EstadoCalendario,
    pub company: String,
}

/// Entrada de la tendencia mensual; siempre se devuelven 6, una por mes
#[derive(Debug, PartialEq, Serialize)]
pub struct TendenciaMes {
    /// Nombre corto del mes (ej: "Jan"), no la clave interna "YYYY-MM"
    pub mes: String,
    pub preventivas: i64,
    pub correctivas: i64,
    pub emergencias: i64,
    pub total: i64,
    pub costos: f64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MaquinasActivas {
    pub current: i64,
    pub total: i64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CostosMensuales {
    pub current: f64,
    pub previous: f64,
}

/// KPIs del dashboard de mantención
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpisMantencion {
    pub active_machines: MaquinasActivas,
    pub in_progress: i64,
    pub month_costs: CostosMensuales,
    pub completed_orders: i64,
    pub overdue_reviews: i64,
}

/// Punto del gráfico de torta por empresa
#[derive(Debug, PartialEq, Serialize)]
pub struct MantencionesPorEmpresa {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Serialize)]
pub struct HistorialMantencion {
    pub id: i32,
    pub fecha: NaiveDate,
    pub vehiculo: String,
    pub tipo: String,
    pub estado: String,
    pub company: String,
    pub costos: f64,
}

/// Página de historial más el total sin paginar
#[derive(Debug, Serialize)]
pub struct HistorialMantenciones {
    pub data: Vec<HistorialMantencion>,
    pub total: i64,
}

/// Filtros del historial, todos opcionales
#[derive(Debug, Default, Deserialize)]
pub struct HistorialQuery {
    pub empresa_id: Option<i32>,
    pub mes: Option<String>,
    pub tipo: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
