use crate::cli::args::{Cli, ColumnArgs, Commands, ConnArgs, FlagCommand, KeyArgs, SequenceCommand};
use clickddl_rs::dialects::{self, ClickhouseDialect, DatabaseDialect, DialectError};
use clickddl_rs::executor::{ConnectionManager, OdbcSession, SessionError};
use clickddl_rs::model::{ColumnDescriptor, Config, ConfigError, ConnectionMeta, KeyFields};
use log::{debug, error, info, warn};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dialect(#[from] DialectError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Failed to read '{0}': {1}")]
    Io(String, std::io::Error),
}

pub fn handle(cli: Cli, config: Config) {
    debug!("Loaded configuration: {:?}", config);

    if let Err(e) = run(cli, config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: Config) -> Result<(), CliError> {
    // Configured messages replace the built-in text
    if let Ok(mut registry) = dialects::get_registry().lock() {
        registry.register(Arc::new(ClickhouseDialect::with_messages(config.messages.clone())));
    }

    let dialect_name = cli.dialect.as_deref().unwrap_or(&config.dialect.name);
    let dialect = dialects::get_dialect(dialect_name)?;
    debug!("Using dialect: {}", dialect.name());

    match cli.command {
        Commands::Info => print_info(dialect.as_ref()),

        Commands::Dialects => {
            for name in dialects::list_dialects() {
                let registered = dialects::get_dialect(&name)?;
                println!("{} (aliases: {})", name, registered.aliases().join(", "));
            }
        }

        Commands::Detect { conn } => {
            let detected = dialects::detect_dialect(&conn)?;
            println!("{}", detected.name());
        }

        Commands::Port { access } => match dialect.default_port(access) {
            Some(port) => println!("{}", port),
            None => println!("{}", dialects::clickhouse::PORT_UNSPECIFIED),
        },

        Commands::Url { conn } => {
            let meta = connection_meta(&config, &conn);
            println!("{}", dialect.url(&meta)?);
        }

        Commands::Field { column, keys, with_name, cr } => {
            let definition = dialect.field_definition(
                &config.connection,
                &column_descriptor(&column),
                &key_fields(&keys),
                with_name,
                cr,
            );
            print!("{}", definition);
            if !cr {
                println!();
            }
        }

        Commands::AddColumn { table, column, keys } => {
            println!(
                "{}",
                dialect.add_column_statement(
                    &config.connection,
                    &table,
                    &column_descriptor(&column),
                    &key_fields(&keys),
                )
            );
        }

        Commands::DropColumn { table, name } => {
            let column = ColumnDescriptor::new(name, clickddl_rs::ValueType::None, -1, -1);
            print!("{}", dialect.drop_column_statement(&table, &column));
        }

        Commands::ModifyColumn { table, column, keys } => {
            print!(
                "{}",
                dialect.modify_column_statement(
                    &config.connection,
                    &table,
                    &column_descriptor(&column),
                    &key_fields(&keys),
                )
            );
        }

        Commands::ReservedWords => {
            for word in dialect.reserved_words() {
                println!("{}", word);
            }
        }

        Commands::Procedures => println!("{}", dialect.sql_list_of_procedures()),

        Commands::Sequence { action } => {
            let sql = match action {
                SequenceCommand::List => dialect.sql_list_of_sequences(),
                SequenceCommand::Exists { name } => dialect.sql_sequence_exists(&name),
                SequenceCommand::Current { name } => dialect.sql_current_sequence_value(&name),
                SequenceCommand::Next { name } => dialect.sql_next_sequence_value(&name),
            };
            println!("{}", sql);
        }

        Commands::LockTables { tables } => print!("{}", dialect.sql_lock_tables(&tables)),

        Commands::UnlockTables { tables } => match dialect.sql_unlock_tables(&tables) {
            Some(sql) => println!("{}", sql),
            None => warn!("Dialect '{}' has no unlock statement", dialect.name()),
        },

        Commands::DropTable { table } => println!("{}", dialect.drop_table_if_exists_statement(&table)),

        Commands::Quote { value } => println!("{}", dialect.quote_sql_string(&value)),

        Commands::CheckIndex { conn, schema, table, fields } => {
            info!("Checking index on {} for {:?}", table, fields);
            let manager = ConnectionManager::new()?;
            let connection = manager.connect(&conn)?;
            let mut session = OdbcSession::new(connection);
            let exists = dialect.check_index_exists(&mut session, schema.as_deref(), &table, &fields)?;
            println!("{}", exists);
        }

        Commands::StrictBignumber { action } => {
            // Write back to the file the configuration came from
            let path = cli
                .config
                .or_else(|| config.source.clone())
                .unwrap_or_else(|| "config.toml".to_string());
            match action {
                FlagCommand::Get => println!("{}", config.connection.strict_big_number_interpretation()),
                FlagCommand::Set { value } => {
                    let mut stored = if std::path::Path::new(&path).exists() {
                        Config::load_from_file(&path)?
                    } else {
                        Config::default()
                    };
                    stored.connection.set_strict_big_number_interpretation(value);
                    stored.save_to_file(&path)?;
                    info!("Set strict big-number interpretation to {} in {}", value, path);
                }
            }
        }

        Commands::Run { conn, file } => {
            let script = std::fs::read_to_string(&file).map_err(|e| CliError::Io(file.clone(), e))?;
            let manager = ConnectionManager::new()?;
            let connection = manager.connect(&conn)?;
            let mut session = OdbcSession::new(connection);
            let count = session.execute_script(&script)?;
            info!("Executed {} statements from {}", count, file);
        }

        Commands::Config { output, env_name } => {
            Config::generate_default_config(&output)?;
            info!("Generated default configuration file: {}", output);

            if let Some(env_name) = env_name {
                let env_path = format!("config/{}.toml", env_name);
                std::fs::create_dir_all("config").map_err(|e| CliError::Io("config".to_string(), e))?;
                Config::generate_default_config(&env_path)?;
                info!("Generated environment configuration file: {}", env_path);
            }
        }
    }

    Ok(())
}

fn print_info(dialect: &dyn DatabaseDialect) {
    let config = dialect.config();
    println!("name: {}", dialect.name());
    println!("description: {}", config.metadata.description);
    println!("aliases: {}", dialect.aliases().join(", "));

    let access: Vec<String> = dialect.access_types().iter().map(ToString::to_string).collect();
    println!("access types: {}", access.join(", "));
    for access in dialect.access_types() {
        let port = dialect
            .default_port(access)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "unspecified".to_string());
        println!("{} driver: {} (default port {})", access, dialect.driver_class(access), port);
    }

    println!("libraries: {}", dialect.used_libraries().join(", "));
    println!("max columns in index: {}", config.limits.max_columns_in_index);
    println!("max varchar length: {}", config.types.max_varchar_length);

    let features = &config.features;
    println!("supports sequences: {}", features.supports_sequences);
    println!("supports auto increment: {}", features.supports_auto_inc);
    println!("supports synonyms: {}", features.supports_synonyms);
}

/// Config connection with command-line values laid over it
fn connection_meta(config: &Config, conn: &ConnArgs) -> ConnectionMeta {
    let mut meta = config.connection.clone();
    if let Some(access) = conn.access {
        meta.access = access;
    }
    if let Some(host) = &conn.host {
        meta.host = host.clone();
    }
    if let Some(port) = &conn.port {
        meta.port = port.clone();
    }
    if let Some(database) = &conn.database {
        meta.database = database.clone();
    }
    meta
}

fn column_descriptor(args: &ColumnArgs) -> ColumnDescriptor {
    ColumnDescriptor::new(args.name.clone(), args.value_type, args.length, args.precision)
}

fn key_fields(args: &KeyArgs) -> KeyFields {
    KeyFields {
        technical_key: args.tk.clone(),
        primary_key: args.pk.clone(),
        use_autoinc: args.autoinc,
    }
}
