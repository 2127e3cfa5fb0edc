//! Fully-qualified table identifier handling.
//!
//! SQL Server table names arrive as three-part identifiers
//! (`database.schema.table`), each part optionally delimited with brackets
//! `[]` or double quotes `""`. Tokenization goes through sqlparser's
//! `MsSqlDialect` so the accepted quoting forms match what the engine itself
//! accepts.
//!
//! # Examples
//!
//! ```ignore
//! let table = QualifiedTable::parse("warehouse.dbo.orders")?;
//! assert_eq!(table.qualified_name(), "[warehouse].[dbo].[orders]");
//!
//! // An empty middle part selects the default schema
//! let table = QualifiedTable::parse("warehouse..orders")?;
//! assert_eq!(table.schema, "dbo");
//! ```

use std::fmt;

use sqlparser::dialect::MsSqlDialect;
use sqlparser::tokenizer::{Token, Tokenizer};

use crate::error::NullScanError;

/// Schema used when the middle part of a three-part name is empty
/// (`db..table`), matching the engine's default-schema resolution.
pub const DEFAULT_SCHEMA: &str = "dbo";

/// A parsed `database.schema.table` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedTable {
    pub database: String,
    pub schema: String,
    pub table: String,
}

impl QualifiedTable {
    /// Parses one input string into a three-part table identifier.
    ///
    /// Accepted forms:
    /// - `db.schema.table` with any mix of plain, bracketed, and
    ///   double-quoted parts
    /// - `db..table` (empty schema part -> [`DEFAULT_SCHEMA`])
    ///
    /// Anything else (fewer or more parts, stray tokens, unterminated
    /// delimiters) is rejected with [`NullScanError::InvalidTableName`].
    pub fn parse(input: &str) -> Result<Self, NullScanError> {
        let invalid = |message: String| NullScanError::InvalidTableName {
            name: input.to_string(),
            message,
        };

        let dialect = MsSqlDialect {};
        let tokens = Tokenizer::new(&dialect, input)
            .tokenize()
            .map_err(|e| invalid(e.to_string()))?;

        // Split the token stream on periods. A missing segment between two
        // periods stays None and later resolves to the default schema.
        let mut parts: Vec<Option<String>> = Vec::new();
        let mut current: Option<String> = None;
        for token in tokens {
            match token {
                Token::Word(word) => {
                    if current.is_some() {
                        return Err(invalid(
                            "expected '.' between identifier parts".to_string(),
                        ));
                    }
                    current = Some(word.value);
                }
                Token::Period => {
                    parts.push(current.take());
                }
                Token::Whitespace(_) => {}
                other => {
                    return Err(invalid(format!("unexpected token '{}'", other)));
                }
            }
        }
        parts.push(current.take());

        let [database, schema, table] = <[Option<String>; 3]>::try_from(parts).map_err(|_| {
            invalid("expected a three-part database.schema.table name".to_string())
        })?;

        let database = database
            .filter(|s| !s.is_empty())
            .ok_or_else(|| invalid("database part is missing".to_string()))?;
        let schema = match schema.filter(|s| !s.is_empty()) {
            Some(schema) => schema,
            None => DEFAULT_SCHEMA.to_string(),
        };
        let table = table
            .filter(|s| !s.is_empty())
            .ok_or_else(|| invalid("table part is missing".to_string()))?;

        Ok(Self {
            database,
            schema,
            table,
        })
    }

    /// Renders the identifier as `[db].[schema].[table]`.
    pub fn qualified_name(&self) -> String {
        format!(
            "{}.{}.{}",
            bracket(&self.database),
            bracket(&self.schema),
            bracket(&self.table)
        )
    }

    /// The catalog view holding this table's column metadata.
    pub fn columns_view(&self) -> String {
        format!("{}.INFORMATION_SCHEMA.COLUMNS", bracket(&self.database))
    }

    /// The catalog view holding this table's existence metadata.
    pub fn tables_view(&self) -> String {
        format!("{}.INFORMATION_SCHEMA.TABLES", bracket(&self.database))
    }
}

impl fmt::Display for QualifiedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

/// Wraps an identifier in brackets, escaping any closing bracket as `]]`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(bracket("orders"), "[orders]");
/// assert_eq!(bracket("we]ird"), "[we]]ird]");
/// ```
pub fn bracket(ident: &str) -> String {
    format!("[{}]", ident.replace(']', "]]"))
}
