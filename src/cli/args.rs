use clap::{Args, Parser, Subcommand};
use clickddl_rs::{AccessType, ValueType};

/// CLI entry point for clickddl
#[derive(Parser, Debug)]
#[command(
    name = "clickddl",
    version,
    about = "ClickHouse SQL dialect rules: DDL, URLs, quoting and catalog SQL"
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Environment (loads config/{env}.toml)
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Dialect name or alias (defaults to the config file's dialect)
    #[arg(long, global = true)]
    pub dialect: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection values overriding the config file's [connection] table
#[derive(Args, Debug, Clone, Default)]
pub struct ConnArgs {
    /// Access type: native, odbc, jndi, oci or plugin
    #[arg(long)]
    pub access: Option<AccessType>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<String>,

    #[arg(long)]
    pub database: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ColumnArgs {
    /// Column name
    #[arg(long)]
    pub name: String,

    /// Logical type: string, number, integer, bignumber, date, timestamp, boolean, binary, ...
    #[arg(long = "type")]
    pub value_type: ValueType,

    /// Declared length, -1 when unspecified
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub length: i32,

    /// Declared precision, -1 when unspecified
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub precision: i32,
}

#[derive(Args, Debug, Clone, Default)]
pub struct KeyArgs {
    /// Technical key column
    #[arg(long)]
    pub tk: Option<String>,

    /// Primary key column
    #[arg(long)]
    pub pk: Option<String>,

    /// Use auto-increment for key columns
    #[arg(long)]
    pub autoinc: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show dialect capabilities
    Info,

    /// List registered dialects and their aliases
    Dialects,

    /// Name the dialect serving a connection string
    Detect {
        /// JDBC-style URL or ODBC connection string
        #[arg(long)]
        conn: String,
    },

    /// Print the default port for an access type
    Port {
        #[arg(long, default_value = "native")]
        access: AccessType,
    },

    /// Build the connection URL
    Url {
        #[command(flatten)]
        conn: ConnArgs,
    },

    /// Render a column definition
    Field {
        #[command(flatten)]
        column: ColumnArgs,

        #[command(flatten)]
        keys: KeyArgs,

        /// Prefix the definition with the column name
        #[arg(long)]
        with_name: bool,

        /// Terminate the definition with a line break
        #[arg(long)]
        cr: bool,
    },

    /// Render ALTER TABLE ... ADD
    AddColumn {
        #[arg(long)]
        table: String,

        #[command(flatten)]
        column: ColumnArgs,

        #[command(flatten)]
        keys: KeyArgs,
    },

    /// Render ALTER TABLE ... DROP COLUMN
    DropColumn {
        #[arg(long)]
        table: String,

        #[arg(long)]
        name: String,
    },

    /// Render the column type change migration
    ModifyColumn {
        #[arg(long)]
        table: String,

        #[command(flatten)]
        column: ColumnArgs,

        #[command(flatten)]
        keys: KeyArgs,
    },

    /// List reserved words
    ReservedWords,

    /// Print the SQL listing stored procedures
    Procedures,

    /// Sequence SQL
    Sequence {
        #[command(subcommand)]
        action: SequenceCommand,
    },

    /// Render LOCK TABLE statements
    LockTables {
        #[arg(required = true)]
        tables: Vec<String>,
    },

    /// Render unlock statements (not supported by ClickHouse)
    UnlockTables {
        tables: Vec<String>,
    },

    /// Render DROP TABLE IF EXISTS
    DropTable {
        table: String,
    },

    /// Quote a string literal
    Quote {
        value: String,
    },

    /// Check that an index covers the given columns
    CheckIndex {
        /// ODBC connection string
        #[arg(long)]
        conn: String,

        #[arg(long)]
        schema: Option<String>,

        #[arg(long)]
        table: String,

        /// Comma-separated column names
        #[arg(long, value_delimiter = ',', required = true)]
        fields: Vec<String>,
    },

    /// Read or change the strict big-number interpretation flag
    StrictBignumber {
        #[command(subcommand)]
        action: FlagCommand,
    },

    /// Execute a SQL script over ODBC
    Run {
        /// ODBC connection string
        #[arg(long)]
        conn: String,

        /// Script file
        #[arg(long)]
        file: String,
    },

    /// Generate configuration file
    Config {
        /// Output path for config file
        #[arg(long, default_value = "config.toml")]
        output: String,

        /// Also create config/{name}.toml
        #[arg(long)]
        env_name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SequenceCommand {
    /// SQL listing all sequences
    List,
    /// SQL checking that a sequence exists
    Exists { name: String },
    /// SQL reading the current value
    Current { name: String },
    /// SQL reading the next value
    Next { name: String },
}

#[derive(Subcommand, Debug)]
pub enum FlagCommand {
    Get,
    Set {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}
