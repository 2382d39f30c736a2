//! Repositorio de consultas agregadas para el dashboard de mantención
//!
//! Cada consulta arma su SQL con placeholders numerados y vincula los
//! valores en el mismo orden. Los filtros opcionales se expresan como una
//! lista de [`Condicion`] que se pliega con AND sobre el WHERE base, en
//! lugar de concatenar fragmentos ad hoc en cada consulta.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::auth::TenantScope;
use crate::models::stats::{
    CostosMesRow, EmpresaConteoRow, EventoCalendarioRow, HistorialRow, MaquinasDisponiblesRow,
    OrdenesMesRow, TendenciaMesRow,
};
use crate::utils::errors::AppError;

/// Filtro opcional de las consultas de estadísticas.
///
/// Cada variante conoce la expresión SQL sobre la que compara; el valor
/// viaja siempre como parámetro vinculado, nunca interpolado en el texto.
/// Las consultas que aceptan condiciones aliasan `mantenciones` como `m`,
/// `maquinas` como `mq` y `tipos_mantencion` como `t`.
#[derive(Debug, Clone, PartialEq)]
pub enum Condicion {
    /// Restringe a las máquinas de una empresa
    Empresa(i32),
    /// Restringe al mes calendario "YYYY-MM" de la fecha de inicio
    Mes(String),
    /// Restringe al nombre exacto del tipo de mantención
    TipoNombre(String),
}

impl Condicion {
    fn expresion(&self) -> &'static str {
        match self {
            Condicion::Empresa(_) => "mq.empresa_id",
            Condicion::Mes(_) => "to_char(m.fecha_inicio, 'YYYY-MM')",
            Condicion::TipoNombre(_) => "t.nombre",
        }
    }
}

/// Pliega las condiciones como cláusulas `AND expresion = $n`, numerando
/// los placeholders a partir de `desde`.
pub fn clausulas_and(condiciones: &[Condicion], desde: usize) -> String {
    let mut sql = String::new();
    for (i, condicion) in condiciones.iter().enumerate() {
        sql.push_str(&format!(" AND {} = ${}", condicion.expresion(), desde + i));
    }
    sql
}

/// Condiciones derivadas del alcance del usuario; vacío para administradores
pub fn condiciones_del_alcance(scope: TenantScope) -> Vec<Condicion> {
    scope
        .empresa_id()
        .map(Condicion::Empresa)
        .into_iter()
        .collect()
}

pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Mantenciones con fecha de inicio dentro de `[desde, hasta]`, ambos
    /// extremos incluidos, en orden cronológico
    pub async fn eventos_calendario(
        &self,
        scope: TenantScope,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> Result<Vec<EventoCalendarioRow>, AppError> {
        let condiciones = condiciones_del_alcance(scope);
        let sql = format!(
            "SELECT m.fecha_inicio AS fecha, mq.codigo AS codigo, \
                    est.nombre AS estado, e.nombre AS empresa \
             FROM mantenciones m \
             JOIN maquinas mq ON mq.id = m.maquina_id AND mq.eliminado = false \
             JOIN empresas e ON e.id = mq.empresa_id AND e.eliminado = false \
             JOIN estados_mantencion est ON est.id = m.estado_mantencion_id \
             WHERE m.eliminado = false AND m.fecha_inicio >= $1 AND m.fecha_inicio <= $2{} \
             ORDER BY m.fecha_inicio",
            clausulas_and(&condiciones, 3)
        );

        let mut consulta = sqlx::query_as::<_, EventoCalendarioRow>(&sql)
            .bind(desde)
            .bind(hasta);
        for condicion in &condiciones {
            consulta = match condicion {
                Condicion::Empresa(id) => consulta.bind(id),
                Condicion::Mes(mes) => consulta.bind(mes),
                Condicion::TipoNombre(nombre) => consulta.bind(nombre),
            };
        }

        let eventos = consulta.fetch_all(&self.pool).await?;
        Ok(eventos)
    }

    /// Conteos por tipo y costos agrupados por mes calendario dentro de
    /// `[desde, hasta)`. Solo devuelve filas para meses con actividad; el
    /// relleno de los meses vacíos es responsabilidad del servicio.
    pub async fn tendencia_mensual(
        &self,
        scope: TenantScope,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> Result<Vec<TendenciaMesRow>, AppError> {
        let condiciones = condiciones_del_alcance(scope);
        let sql = format!(
            "SELECT to_char(m.fecha_inicio, 'YYYY-MM') AS mes, \
                    COUNT(*) FILTER (WHERE t.nombre = 'Preventiva') AS preventivas, \
                    COUNT(*) FILTER (WHERE t.nombre = 'Correctiva') AS correctivas, \
                    COUNT(*) FILTER (WHERE t.nombre = 'Emergencia') AS emergencias, \
                    COUNT(*) AS total, \
                    COALESCE(SUM(m.costo), 0)::float8 AS costos \
             FROM mantenciones m \
             JOIN maquinas mq ON mq.id = m.maquina_id AND mq.eliminado = false \
             JOIN tipos_mantencion t ON t.id = m.tipo_mantencion_id \
             WHERE m.eliminado = false AND m.fecha_inicio >= $1 AND m.fecha_inicio < $2{} \
             GROUP BY 1 \
             ORDER BY 1",
            clausulas_and(&condiciones, 3)
        );

        let mut consulta = sqlx::query_as::<_, TendenciaMesRow>(&sql)
            .bind(desde)
            .bind(hasta);
        for condicion in &condiciones {
            consulta = match condicion {
                Condicion::Empresa(id) => consulta.bind(id),
                Condicion::Mes(mes) => consulta.bind(mes),
                Condicion::TipoNombre(nombre) => consulta.bind(nombre),
            };
        }

        let meses = consulta.fetch_all(&self.pool).await?;
        Ok(meses)
    }

    /// Máquinas operativas versus flota total
    pub async fn maquinas_disponibles(
        &self,
        scope: TenantScope,
    ) -> Result<MaquinasDisponiblesRow, AppError> {
        let condiciones = condiciones_del_alcance(scope);
        let sql = format!(
            "SELECT COUNT(*) FILTER (WHERE mq.disponible) AS disponibles, \
                    COUNT(*) AS total \
             FROM maquinas mq \
             WHERE mq.eliminado = false{}",
            clausulas_and(&condiciones, 1)
        );

        let mut consulta = sqlx::query_as::<_, MaquinasDisponiblesRow>(&sql);
        for condicion in &condiciones {
            consulta = match condicion {
                Condicion::Empresa(id) => consulta.bind(id),
                Condicion::Mes(mes) => consulta.bind(mes),
                Condicion::TipoNombre(nombre) => consulta.bind(nombre),
            };
        }

        let fila = consulta.fetch_one(&self.pool).await?;
        Ok(fila)
    }

    /// Órdenes en proceso y completadas con inicio dentro de `[desde, hasta)`
    pub async fn ordenes_del_mes(
        &self,
        scope: TenantScope,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> Result<OrdenesMesRow, AppError> {
        let condiciones = condiciones_del_alcance(scope);
        let sql = format!(
            "SELECT COUNT(*) FILTER (WHERE est.nombre = 'En Proceso') AS en_proceso, \
                    COUNT(*) FILTER (WHERE est.nombre = 'Completado') AS completadas \
             FROM mantenciones m \
             JOIN maquinas mq ON mq.id = m.maquina_id AND mq.eliminado = false \
             JOIN estados_mantencion est ON est.id = m.estado_mantencion_id \
             WHERE m.eliminado = false AND m.fecha_inicio >= $1 AND m.fecha_inicio < $2{}",
            clausulas_and(&condiciones, 3)
        );

        let mut consulta = sqlx::query_as::<_, OrdenesMesRow>(&sql)
            .bind(desde)
            .bind(hasta);
        for condicion in &condiciones {
            consulta = match condicion {
                Condicion::Empresa(id) => consulta.bind(id),
                Condicion::Mes(mes) => consulta.bind(mes),
                Condicion::TipoNombre(nombre) => consulta.bind(nombre),
            };
        }

        let fila = consulta.fetch_one(&self.pool).await?;
        Ok(fila)
    }

    /// Costos del mes en curso y del anterior en una sola pasada.
    ///
    /// El rango total es `[inicio_mes_anterior, inicio_mes_siguiente)` y
    /// `inicio_mes_actual` separa ambos meses dentro de él.
    pub async fn costos_mensuales(
        &self,
        scope: TenantScope,
        inicio_mes_anterior: NaiveDate,
        inicio_mes_actual: NaiveDate,
        inicio_mes_siguiente: NaiveDate,
    ) -> Result<CostosMesRow, AppError> {
        let condiciones = condiciones_del_alcance(scope);
        let sql = format!(
            "SELECT COALESCE(SUM(m.costo) FILTER (WHERE m.fecha_inicio >= $2), 0)::float8 AS mes_actual, \
                    COALESCE(SUM(m.costo) FILTER (WHERE m.fecha_inicio < $2), 0)::float8 AS mes_anterior \
             FROM mantenciones m \
             JOIN maquinas mq ON mq.id = m.maquina_id AND mq.eliminado = false \
             WHERE m.eliminado = false AND m.fecha_inicio >= $1 AND m.fecha_inicio < $3{}",
            clausulas_and(&condiciones, 4)
        );

        let mut consulta = sqlx::query_as::<_, CostosMesRow>(&sql)
            .bind(inicio_mes_anterior)
            .bind(inicio_mes_actual)
            .bind(inicio_mes_siguiente);
        for condicion in &condiciones {
            consulta = match condicion {
                Condicion::Empresa(id) => consulta.bind(id),
                Condicion::Mes(mes) => consulta.bind(mes),
                Condicion::TipoNombre(nombre) => consulta.bind(nombre),
            };
        }

        let fila = consulta.fetch_one(&self.pool).await?;
        Ok(fila)
    }

    /// Máquinas con la revisión técnica vencida antes de `hoy`
    pub async fn revisiones_vencidas(
        &self,
        scope: TenantScope,
        hoy: NaiveDate,
    ) -> Result<i64, AppError> {
        let condiciones = condiciones_del_alcance(scope);
        let sql = format!(
            "SELECT COUNT(*) FROM maquinas mq \
             WHERE mq.eliminado = false AND mq.vencimiento_revision_tecnica < $1{}",
            clausulas_and(&condiciones, 2)
        );

        let mut consulta = sqlx::query_scalar::<_, i64>(&sql).bind(hoy);
        for condicion in &condiciones {
            consulta = match condicion {
                Condicion::Empresa(id) => consulta.bind(id),
                Condicion::Mes(mes) => consulta.bind(mes),
                Condicion::TipoNombre(nombre) => consulta.bind(nombre),
            };
        }

        let vencidas = consulta.fetch_one(&self.pool).await?;
        Ok(vencidas)
    }

    /// Mantenciones por empresa desde `desde`, incluyendo con conteo cero
    /// a las empresas sin actividad. Orden: cantidad descendente y nombre
    /// ascendente como desempate estable.
    pub async fn conteo_por_empresa(
        &self,
        scope: TenantScope,
        desde: NaiveDate,
    ) -> Result<Vec<EmpresaConteoRow>, AppError> {
        // El universo es empresas, no mantenciones: el alcance se aplica
        // sobre e.id y los LEFT JOIN conservan los conteos en cero.
        let filtro_alcance = match scope.empresa_id() {
            Some(_) => " AND e.id = $2",
            None => "",
        };
        let sql = format!(
            "SELECT e.nombre AS nombre, COUNT(m.id) AS cantidad \
             FROM empresas e \
             LEFT JOIN maquinas mq ON mq.empresa_id = e.id AND mq.eliminado = false \
             LEFT JOIN mantenciones m ON m.maquina_id = mq.id \
                  AND m.eliminado = false AND m.fecha_inicio >= $1 \
             WHERE e.eliminado = false{} \
             GROUP BY e.id, e.nombre \
             ORDER BY cantidad DESC, e.nombre ASC",
            filtro_alcance
        );

        let mut consulta = sqlx::query_as::<_, EmpresaConteoRow>(&sql).bind(desde);
        if let Some(empresa_id) = scope.empresa_id() {
            consulta = consulta.bind(empresa_id);
        }

        let conteos = consulta.fetch_all(&self.pool).await?;
        Ok(conteos)
    }

    /// Página del historial más el total que ignora la paginación.
    ///
    /// Ambas consultas comparten las mismas condiciones, de modo que el
    /// total siempre corresponde al conjunto filtrado completo.
    pub async fn historial(
        &self,
        condiciones: &[Condicion],
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<HistorialRow>, i64), AppError> {
        const ORIGEN: &str = "FROM mantenciones m \
             JOIN maquinas mq ON mq.id = m.maquina_id AND mq.eliminado = false \
             JOIN empresas e ON e.id = mq.empresa_id AND e.eliminado = false \
             JOIN tipos_mantencion t ON t.id = m.tipo_mantencion_id \
             JOIN estados_mantencion est ON est.id = m.estado_mantencion_id \
             WHERE m.eliminado = false";

        let sql_datos = format!(
            "SELECT m.id AS id, m.fecha_inicio AS fecha, mq.codigo AS vehiculo, \
                    t.nombre AS tipo, est.nombre AS estado, e.nombre AS empresa, \
                    COALESCE(m.costo, 0)::float8 AS costos \
             {}{} \
             ORDER BY m.fecha_inicio DESC, m.id DESC LIMIT ${} OFFSET ${}",
            ORIGEN,
            clausulas_and(condiciones, 1),
            condiciones.len() + 1,
            condiciones.len() + 2
        );
        let sql_total = format!(
            "SELECT COUNT(*) {}{}",
            ORIGEN,
            clausulas_and(condiciones, 1)
        );

        let mut consulta_datos = sqlx::query_as::<_, HistorialRow>(&sql_datos);
        let mut consulta_total = sqlx::query_scalar::<_, i64>(&sql_total);
        for condicion in condiciones {
            consulta_datos = match condicion {
                Condicion::Empresa(id) => consulta_datos.bind(id),
                Condicion::Mes(mes) => consulta_datos.bind(mes),
                Condicion::TipoNombre(nombre) => consulta_datos.bind(nombre),
            };
            consulta_total = match condicion {
                Condicion::Empresa(id) => consulta_total.bind(id),
                Condicion::Mes(mes) => consulta_total.bind(mes),
                Condicion::TipoNombre(nombre) => consulta_total.bind(nombre),
            };
        }
        let consulta_datos = consulta_datos.bind(limit).bind(offset);

        let (filas, total) = tokio::try_join!(
            consulta_datos.fetch_all(&self.pool),
            consulta_total.fetch_one(&self.pool),
        )?;

        Ok((filas, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_condiciones_no_agrega_clausulas() {
        assert_eq!(clausulas_and(&[], 1), "");
    }

    #[test]
    fn numera_los_placeholders_desde_el_inicio_indicado() {
        let condiciones = vec![
            Condicion::Empresa(7),
            Condicion::Mes("2024-03".to_string()),
            Condicion::TipoNombre("Preventiva".to_string()),
        ];

        assert_eq!(
            clausulas_and(&condiciones, 3),
            " AND mq.empresa_id = $3 AND to_char(m.fecha_inicio, 'YYYY-MM') = $4 AND t.nombre = $5"
        );
    }

    #[test]
    fn el_alcance_de_administrador_no_genera_condiciones() {
        assert!(condiciones_del_alcance(TenantScope(None)).is_empty());
        assert_eq!(
            condiciones_del_alcance(TenantScope(Some(2))),
            vec![Condicion::Empresa(2)]
        );
    }
}
