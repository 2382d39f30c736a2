//! Servicio de estadísticas de mantención
//!
//! Ejecuta las consultas agregadas a través de [`StatsRepository`] y da a
//! las filas la forma que consume el dashboard: deriva estados del
//! calendario, rellena los meses sin actividad de la tendencia y arma el
//! snapshot de KPIs. La fecha "hoy" llega siempre como parámetro para que
//! los cortes de mes sean deterministas.

use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate};
use sqlx::PgPool;

use crate::models::auth::TenantScope;
use crate::models::stats::{
    CostosMensuales, CostosMesRow, EstadoCalendario, EventoCalendario, HistorialMantencion,
    HistorialMantenciones, HistorialQuery, KpisMantencion, MantencionesPorEmpresa,
    MaquinasActivas, MaquinasDisponiblesRow, OrdenesMesRow, TendenciaMes, TendenciaMesRow,
};
use crate::repositories::stats_repository::{condiciones_del_alcance, Condicion, StatsRepository};
use crate::utils::errors::AppError;
use crate::utils::validation::{validar_mes, validar_paginacion};

const PAGINA_POR_DEFECTO: i64 = 1;
const LIMITE_POR_DEFECTO: i64 = 5;

pub struct StatsService {
    repo: StatsRepository,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: StatsRepository::new(pool),
        }
    }

    /// Eventos del calendario entre un mes hacia atrás y dos hacia
    /// adelante, con el estado visual derivado de cada mantención
    pub async fn calendario(
        &self,
        scope: TenantScope,
        hoy: NaiveDate,
    ) -> Result<Vec<EventoCalendario>, AppError> {
        let desde = meses_atras(hoy, 1);
        let hasta = meses_adelante(hoy, 2);
        let filas = self.repo.eventos_calendario(scope, desde, hasta).await?;

        let eventos = filas
            .into_iter()
            .map(|fila| EventoCalendario {
                date: fila.fecha,
                title: format!("Mantención {}", fila.codigo),
                status: derivar_estado(&fila.estado, fila.fecha, hoy),
                company: fila.empresa,
            })
            .collect();

        Ok(eventos)
    }

    /// Tendencia de los últimos 6 meses calendario terminando en el mes
    /// de `hoy`, siempre con 6 entradas de más antigua a más reciente
    pub async fn tendencia_mensual(
        &self,
        scope: TenantScope,
        hoy: NaiveDate,
    ) -> Result<Vec<TendenciaMes>, AppError> {
        let inicio_mes_actual = primer_dia_del_mes(hoy);
        let desde = meses_atras(inicio_mes_actual, 5);
        let hasta = meses_adelante(inicio_mes_actual, 1);

        let filas = self.repo.tendencia_mensual(scope, desde, hasta).await?;

        Ok(rellenar_semestre(hoy, filas))
    }

    /// Snapshot de KPIs del dashboard. Las cuatro lecturas son
    /// independientes y corren en paralelo; si una falla, falla el
    /// snapshot completo.
    pub async fn kpis(
        &self,
        scope: TenantScope,
        hoy: NaiveDate,
    ) -> Result<KpisMantencion, AppError> {
        let inicio_mes_actual = primer_dia_del_mes(hoy);
        let inicio_mes_anterior = meses_atras(inicio_mes_actual, 1);
        let inicio_mes_siguiente = meses_adelante(inicio_mes_actual, 1);

        let (maquinas, ordenes, costos, vencidas) = tokio::try_join!(
            self.repo.maquinas_disponibles(scope),
            self.repo
                .ordenes_del_mes(scope, inicio_mes_actual, inicio_mes_siguiente),
            self.repo.costos_mensuales(
                scope,
                inicio_mes_anterior,
                inicio_mes_actual,
                inicio_mes_siguiente
            ),
            self.repo.revisiones_vencidas(scope, hoy),
        )?;

        Ok(armar_kpis(maquinas, ordenes, costos, vencidas))
    }

    /// Mantenciones de los últimos 6 meses agrupadas por empresa,
    /// incluyendo a las empresas sin actividad
    pub async fn por_empresa(
        &self,
        scope: TenantScope,
        hoy: NaiveDate,
    ) -> Result<Vec<MantencionesPorEmpresa>, AppError> {
        let desde = meses_atras(hoy, 6);
        let conteos = self.repo.conteo_por_empresa(scope, desde).await?;

        let puntos = conteos
            .into_iter()
            .map(|fila| MantencionesPorEmpresa {
                name: fila.nombre,
                value: fila.cantidad,
            })
            .collect();

        Ok(puntos)
    }

    /// Página del historial de mantenciones con filtros conjuntivos
    /// opcionales. El total devuelto ignora la paginación.
    pub async fn historial(
        &self,
        scope: TenantScope,
        filtros: HistorialQuery,
    ) -> Result<HistorialMantenciones, AppError> {
        let page = filtros.page.unwrap_or(PAGINA_POR_DEFECTO);
        let limit = filtros.limit.unwrap_or(LIMITE_POR_DEFECTO);
        validar_paginacion(page, limit)?;

        let mut condiciones = condiciones_del_alcance(scope);
        if let Some(empresa_id) = filtros.empresa_id {
            // Junto al alcance, un filtro por otra empresa solo puede
            // producir un resultado vacío, nunca filas ajenas.
            condiciones.push(Condicion::Empresa(empresa_id));
        }
        if let Some(mes) = &filtros.mes {
            validar_mes(mes)?;
            condiciones.push(Condicion::Mes(mes.clone()));
        }
        if let Some(tipo) = &filtros.tipo {
            condiciones.push(Condicion::TipoNombre(tipo.clone()));
        }

        let offset = desplazamiento(page, limit);
        let (filas, total) = self.repo.historial(&condiciones, limit, offset).await?;

        let data = filas
            .into_iter()
            .map(|fila| HistorialMantencion {
                id: fila.id,
                fecha: fila.fecha,
                vehiculo: fila.vehiculo,
                tipo: fila.tipo,
                estado: fila.estado,
                company: fila.empresa,
                costos: fila.costos,
            })
            .collect();

        Ok(HistorialMantenciones { data, total })
    }
}

/// Primer día del mes de `fecha`
fn primer_dia_del_mes(fecha: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(fecha.year(), fecha.month(), 1).unwrap_or(fecha)
}

/// Resta meses calendario ajustando el día al fin de mes cuando no existe
fn meses_atras(fecha: NaiveDate, meses: u32) -> NaiveDate {
    fecha
        .checked_sub_months(Months::new(meses))
        .unwrap_or(fecha)
}

fn meses_adelante(fecha: NaiveDate, meses: u32) -> NaiveDate {
    fecha
        .checked_add_months(Months::new(meses))
        .unwrap_or(fecha)
}

/// Clave interna "YYYY-MM" con la que se cuadran las filas de la consulta
fn clave_mes(fecha: NaiveDate) -> String {
    format!("{:04}-{:02}", fecha.year(), fecha.month())
}

/// Nombre corto del mes que espera el gráfico (ej: "Jan")
fn etiqueta_mes(fecha: NaiveDate) -> String {
    fecha.format("%b").to_string()
}

/// Los 6 inicios de mes que terminan en el mes de `hoy`, de más antiguo a
/// más reciente
fn ventana_semestre(hoy: NaiveDate) -> Vec<NaiveDate> {
    let actual = primer_dia_del_mes(hoy);
    (0..6).rev().map(|n| meses_atras(actual, n)).collect()
}

/// Estado visual de un evento del calendario según su estado y fecha
fn derivar_estado(estado: &str, fecha: NaiveDate, hoy: NaiveDate) -> EstadoCalendario {
    if estado == "Completado" {
        EstadoCalendario::Completed
    } else if estado == "Pendiente" && fecha < hoy {
        EstadoCalendario::Overdue
    } else {
        EstadoCalendario::Scheduled
    }
}

/// Cuadra las filas devueltas por la consulta contra la ventana fija de
/// 6 meses, rellenando con ceros los meses sin actividad
fn rellenar_semestre(hoy: NaiveDate, filas: Vec<TendenciaMesRow>) -> Vec<TendenciaMes> {
    let mut por_mes: HashMap<String, TendenciaMesRow> = filas
        .into_iter()
        .map(|fila| (fila.mes.clone(), fila))
        .collect();

    let tendencia = ventana_semestre(hoy)
        .into_iter()
        .map(|inicio| {
            let mes = etiqueta_mes(inicio);
            match por_mes.remove(&clave_mes(inicio)) {
                Some(fila) => TendenciaMes {
                    mes,
                    preventivas: fila.preventivas,
                    correctivas: fila.correctivas,
                    emergencias: fila.emergencias,
                    total: fila.total,
                    costos: fila.costos,
                },
                None => TendenciaMes {
                    mes,
                    preventivas: 0,
                    correctivas: 0,
                    emergencias: 0,
                    total: 0,
                    costos: 0.0,
                },
            }
        })
        .collect();

    if !por_mes.is_empty() {
        log::warn!(
            "Tendencia mensual: la consulta devolvió meses fuera de la ventana: {:?}",
            por_mes.keys().collect::<Vec<_>>()
        );
    }

    tendencia
}

fn armar_kpis(
    maquinas: MaquinasDisponiblesRow,
    ordenes: OrdenesMesRow,
    costos: CostosMesRow,
    revisiones_vencidas: i64,
) -> KpisMantencion {
    KpisMantencion {
        active_machines: MaquinasActivas {
            current: maquinas.disponibles,
            total: maquinas.total,
        },
        in_progress: ordenes.en_proceso,
        month_costs: CostosMensuales {
            current: costos.mes_actual,
            previous: costos.mes_anterior,
        },
        completed_orders: ordenes.completadas,
        overdue_reviews: revisiones_vencidas,
    }
}

/// Desplazamiento de filas para una página 1-based
fn desplazamiento(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(anio: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(anio, mes, dia).unwrap()
    }

    #[test]
    fn la_ventana_semestral_cruza_el_cambio_de_anio() {
        let ventana = ventana_semestre(fecha(2024, 2, 15));
        let claves: Vec<String> = ventana.iter().copied().map(clave_mes).collect();

        assert_eq!(
            claves,
            ["2023-09", "2023-10", "2023-11", "2023-12", "2024-01", "2024-02"]
        );
    }

    #[test]
    fn la_aritmetica_de_meses_ajusta_el_fin_de_mes() {
        assert_eq!(meses_adelante(fecha(2024, 1, 31), 1), fecha(2024, 2, 29));
        assert_eq!(meses_atras(fecha(2024, 3, 31), 1), fecha(2024, 2, 29));
        assert_eq!(meses_adelante(fecha(2023, 12, 15), 2), fecha(2024, 2, 15));
    }

    #[test]
    fn clave_y_etiqueta_usan_formatos_distintos() {
        let dia = fecha(2024, 1, 15);

        assert_eq!(clave_mes(dia), "2024-01");
        assert_eq!(etiqueta_mes(dia), "Jan");
    }

    #[test]
    fn rellena_los_meses_sin_actividad() {
        let hoy = fecha(2024, 3, 10);
        let filas = vec![TendenciaMesRow {
            mes: "2024-03".to_string(),
            preventivas: 1,
            correctivas: 0,
            emergencias: 1,
            total: 2,
            costos: 300.0,
        }];

        let tendencia = rellenar_semestre(hoy, filas);

        assert_eq!(tendencia.len(), 6);
        assert_eq!(tendencia[0].mes, "Oct");
        assert_eq!(tendencia[5].mes, "Mar");
        assert_eq!(tendencia[5].total, 2);
        assert_eq!(tendencia[5].costos, 300.0);
        for entrada in &tendencia[..5] {
            assert_eq!(entrada.total, 0);
            assert_eq!(entrada.costos, 0.0);
        }
    }

    #[test]
    fn la_tendencia_sin_datos_devuelve_seis_meses_en_cero() {
        let tendencia = rellenar_semestre(fecha(2024, 7, 1), Vec::new());

        assert_eq!(tendencia.len(), 6);
        assert!(tendencia.iter().all(|m| m.total == 0 && m.costos == 0.0));
        assert_eq!(
            tendencia.iter().map(|m| m.mes.as_str()).collect::<Vec<_>>(),
            ["Feb", "Mar", "Apr", "May", "Jun", "Jul"]
        );
    }

    #[test]
    fn deriva_el_estado_visual_del_calendario() {
        let hoy = fecha(2024, 5, 10);

        assert_eq!(
            derivar_estado("Completado", fecha(2024, 5, 1), hoy),
            EstadoCalendario::Completed
        );
        assert_eq!(
            derivar_estado("Pendiente", fecha(2024, 5, 9), hoy),
            EstadoCalendario::Overdue
        );
        // Una pendiente que parte hoy todavía no está atrasada
        assert_eq!(
            derivar_estado("Pendiente", hoy, hoy),
            EstadoCalendario::Scheduled
        );
        assert_eq!(
            derivar_estado("En Proceso", fecha(2024, 4, 1), hoy),
            EstadoCalendario::Scheduled
        );
        assert_eq!(
            derivar_estado("Pendiente", fecha(2024, 6, 1), hoy),
            EstadoCalendario::Scheduled
        );
    }

    #[test]
    fn el_desplazamiento_sigue_a_la_pagina() {
        assert_eq!(desplazamiento(1, 5), 0);
        assert_eq!(desplazamiento(2, 5), 5);
        assert_eq!(desplazamiento(3, 10), 20);
    }

    #[test]
    fn arma_los_kpis_con_la_flota_vacia() {
        let kpis = armar_kpis(
            MaquinasDisponiblesRow {
                disponibles: 0,
                total: 0,
            },
            OrdenesMesRow {
                en_proceso: 0,
                completadas: 0,
            },
            CostosMesRow {
                mes_actual: 0.0,
                mes_anterior: 0.0,
            },
            0,
        );

        assert_eq!(
            kpis.active_machines,
            MaquinasActivas {
                current: 0,
                total: 0
            }
        );
        assert_eq!(kpis.in_progress, 0);
        assert_eq!(kpis.completed_orders, 0);
        assert_eq!(kpis.overdue_reviews, 0);
        assert_eq!(
            kpis.month_costs,
            CostosMensuales {
                current: 0.0,
                previous: 0.0
            }
        );
    }
}
