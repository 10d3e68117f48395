//! Schema bootstrap script and the emulator-mode rewrites applied to it.

/// Idempotent DDL for every table and index. Written for a stock Postgres.
pub const SCHEMA: &str = include_str!("../schema.sql");

/// Functions the schema expects from extensions that the embedded server
/// does not load. Registered before [`SCHEMA`] runs in emulator mode.
pub const UUID_SHIMS: &str = "CREATE OR REPLACE FUNCTION uuid_generate_v4() RETURNS uuid \
     LANGUAGE sql VOLATILE AS 'SELECT gen_random_uuid()';";

/// Remove every `CREATE EXTENSION` statement from a DDL script.
///
/// Statements may span several lines; everything up to and including the
/// terminating `;` is dropped. All other lines are kept verbatim.
pub fn strip_extensions(ddl: &str) -> String {
    let mut out = String::with_capacity(ddl.len());
    let mut skipping = false;

    for line in ddl.lines() {
        if !skipping
            && line
                .trim_start()
                .to_ascii_uppercase()
                .starts_with("CREATE EXTENSION")
        {
            skipping = true;
        }

        if skipping {
            if line.contains(';') {
                skipping = false;
            }
            continue;
        }

        out.push_str(line);
        out.push('\n');
    }

    out
}
