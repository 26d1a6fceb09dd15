//! SQL query builders for PostgreSQL statistics views.
//!
//! Queries return every row without `LIMIT`: the baseline reset detector sums
//! all rows, and a row falling out of a top-N cut would look like a reset.
//! Duplicate names are collapsed here with `GROUP BY`.

/// pg_stat_database, one row per database (plus shared objects on PG12+).
pub(super) fn build_stat_database_query() -> &'static str {
    r#"
        SELECT
            COALESCE(datname, '<shared>') as name,
            sum(COALESCE(xact_commit, 0))::bigint as xact_commit,
            sum(COALESCE(xact_rollback, 0))::bigint as xact_rollback,
            sum(COALESCE(blks_read, 0))::bigint as blks_read,
            sum(COALESCE(blks_hit, 0))::bigint as blks_hit,
            sum(COALESCE(tup_returned, 0))::bigint as tup_returned,
            sum(COALESCE(tup_inserted, 0) + COALESCE(tup_updated, 0)
                + COALESCE(tup_deleted, 0))::bigint as tup_written
        FROM pg_stat_database
        WHERE COALESCE(datname, '') NOT IN ('template0', 'template1')
        GROUP BY 1
    "#
}

/// pg_stat_user_tables scan and tuple-write counters.
pub(super) fn build_stat_user_tables_query() -> &'static str {
    r#"
        SELECT
            schemaname || '.' || relname as name,
            sum(COALESCE(seq_scan, 0))::bigint as seq_scan,
            sum(COALESCE(seq_tup_read, 0))::bigint as seq_tup_read,
            sum(COALESCE(idx_scan, 0))::bigint as idx_scan,
            sum(COALESCE(idx_tup_fetch, 0))::bigint as idx_tup_fetch,
            sum(COALESCE(n_tup_ins, 0))::bigint as n_tup_ins,
            sum(COALESCE(n_tup_upd, 0))::bigint as n_tup_upd,
            sum(COALESCE(n_tup_del, 0))::bigint as n_tup_del
        FROM pg_stat_user_tables
        GROUP BY 1
    "#
}

/// pg_statio_user_tables heap and index block counters.
pub(super) fn build_statio_user_tables_query() -> &'static str {
    r#"
        SELECT
            schemaname || '.' || relname as name,
            sum(COALESCE(heap_blks_read, 0))::bigint as heap_blks_read,
            sum(COALESCE(heap_blks_hit, 0))::bigint as heap_blks_hit,
            sum(COALESCE(idx_blks_read, 0))::bigint as idx_blks_read,
            sum(COALESCE(idx_blks_hit, 0))::bigint as idx_blks_hit
        FROM pg_statio_user_tables
        GROUP BY 1
    "#
}

/// pg_stat_user_indexes usage counters.
pub(super) fn build_stat_user_indexes_query() -> &'static str {
    r#"
        SELECT
            schemaname || '.' || indexrelname as name,
            sum(COALESCE(idx_scan, 0))::bigint as idx_scan,
            sum(COALESCE(idx_tup_read, 0))::bigint as idx_tup_read,
            sum(COALESCE(idx_tup_fetch, 0))::bigint as idx_tup_fetch
        FROM pg_stat_user_indexes
        GROUP BY 1
    "#
}

/// Execution time column of pg_stat_statements, renamed in PostgreSQL 13.
fn exec_time_column(server_version_num: Option<i32>) -> &'static str {
    if server_version_num.unwrap_or(0) >= 130000 {
        "s.total_exec_time"
    } else {
        "s.total_time"
    }
}

/// pg_stat_statements grouped by query text.
pub(super) fn build_stat_statements_query(server_version_num: Option<i32>) -> String {
    let exec_time = exec_time_column(server_version_num);
    format!(
        r#"
            SELECT
                regexp_replace(COALESCE(s.query, ''), '\s+', ' ', 'g') as name,
                sum(s.calls)::bigint as calls,
                (sum({exec_time}) * 1000)::bigint as exec_time_us,
                sum(s.rows)::bigint as rows,
                sum(s.shared_blks_read)::bigint as shared_blks_read,
                sum(s.shared_blks_hit)::bigint as shared_blks_hit
            FROM pg_stat_statements s
            GROUP BY 1
        "#
    )
}

/// pg_stat_statements grouped by role.
pub(super) fn build_stat_statements_by_user_query(server_version_num: Option<i32>) -> String {
    let exec_time = exec_time_column(server_version_num);
    format!(
        r#"
            SELECT
                COALESCE(r.rolname, s.userid::text) as name,
                sum(s.calls)::bigint as calls,
                (sum({exec_time}) * 1000)::bigint as exec_time_us,
                sum(s.rows)::bigint as rows,
                sum(s.temp_blks_written)::bigint as temp_blks_written
            FROM pg_stat_statements s
            LEFT JOIN pg_roles r ON r.oid = s.userid
            GROUP BY 1
        "#
    )
}

/// pg_stat_slru, or `None` before PostgreSQL 13 where the view does not exist.
pub(super) fn build_stat_slru_query(server_version_num: Option<i32>) -> Option<&'static str> {
    if server_version_num.unwrap_or(0) < 130000 {
        return None;
    }
    Some(
        r#"
            SELECT
                name,
                COALESCE(blks_zeroed, 0)::bigint as blks_zeroed,
                COALESCE(blks_hit, 0)::bigint as blks_hit,
                COALESCE(blks_read, 0)::bigint as blks_read,
                COALESCE(blks_written, 0)::bigint as blks_written,
                COALESCE(flushes, 0)::bigint as flushes,
                COALESCE(truncates, 0)::bigint as truncates
            FROM pg_stat_slru
        "#,
    )
}
