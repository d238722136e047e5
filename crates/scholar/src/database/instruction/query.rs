//! Query instruction for finding publications in the database.
//!
//! Queries combine one [`QueryCriteria`] with an optional owner restriction
//! and ordering. Unless an ordering is requested, results come back newest
//! first (creation time descending, ties broken by id descending), which is
//! the order summaries are built from.
//!
//! # Examples
//!
//! ```no_run
//! use scholar::{
//!   database::{Database, OrderField, Query},
//!   prelude::*,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("publications.db").await?;
//!
//! // A user's catalogue, newest first
//! let mine = Query::by_user(1).execute(&mut db).await?;
//!
//! // Case-insensitive search, restricted to one user
//! let hits = Query::text("zero knowledge").for_user(1).execute(&mut db).await?;
//!
//! // Everything from 2021, most cited first
//! let cited = Query::by_year(2021).order_by(OrderField::Citations).descending().execute(&mut db).await?;
//! # Ok(())
//! # }
//! ```

use super::*;

/// Represents different ways to select publications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCriteria<'a> {
  /// A single publication by its database id
  Id(i64),
  /// Every publication owned by a user
  User(i64),
  /// Case-insensitive substring over title, abstract, keywords, authors and venue
  Text(&'a str),
  /// Case-insensitive substring of the author list
  Author(&'a str),
  /// Publications from one year
  Year(i32),
  /// Publications in a research area, compared case-insensitively
  Area(&'a str),
  /// Publications carrying a DOI
  Doi(&'a str),
  /// Every stored publication
  All,
}

/// Available fields for ordering query results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
  /// Order by title
  Title,
  /// Order by publication year
  Year,
  /// Order by when the entry was created
  CreatedAt,
  /// Order by citation count
  Citations,
}

impl OrderField {
  fn as_sql_str(&self) -> &'static str {
    match self {
      OrderField::Title => "title COLLATE NOCASE",
      OrderField::Year => "year",
      OrderField::CreatedAt => "created_at",
      OrderField::Citations => "citation_count",
    }
  }
}

/// A query for retrieving publications from the database
#[derive(Debug, Clone)]
pub struct Query<'a> {
  criteria:   QueryCriteria<'a>,
  user_id:    Option<i64>,
  order_by:   Option<OrderField>,
  descending: bool,
}

impl<'a> Query<'a> {
  /// Creates a new query with the given criteria
  pub fn new(criteria: QueryCriteria<'a>) -> Self {
    Self { criteria, user_id: None, order_by: None, descending: false }
  }

  /// Creates a query for a single publication
  pub fn by_id(id: i64) -> Self { Self::new(QueryCriteria::Id(id)) }

  /// Creates a query for a user's whole catalogue
  pub fn by_user(user_id: i64) -> Self { Self::new(QueryCriteria::User(user_id)) }

  /// Creates a text search query
  pub fn text(query: &'a str) -> Self { Self::new(QueryCriteria::Text(query)) }

  /// Creates a query to find publications by author name
  pub fn by_author(name: &'a str) -> Self { Self::new(QueryCriteria::Author(name)) }

  /// Creates a query for publications from one year
  pub fn by_year(year: i32) -> Self { Self::new(QueryCriteria::Year(year)) }

  /// Creates a query for publications in a research area
  pub fn by_area(area: &'a str) -> Self { Self::new(QueryCriteria::Area(area)) }

  /// Creates a query for publications carrying a DOI
  pub fn by_doi(doi: &'a str) -> Self { Self::new(QueryCriteria::Doi(doi)) }

  /// Creates a query that returns all publications
  pub fn list_all() -> Self { Self::new(QueryCriteria::All) }

  /// Restricts results to publications owned by `user_id`
  pub fn for_user(mut self, user_id: i64) -> Self {
    self.user_id = Some(user_id);
    self
  }

  /// Sets the field to order results by
  pub fn order_by(mut self, field: OrderField) -> Self {
    self.order_by = Some(field);
    self
  }

  /// Sets the order to descending (default is ascending)
  pub fn descending(mut self) -> Self {
    self.descending = true;
    self
  }

  /// Builds the full `SELECT` and its parameters.
  fn build_sql(&self) -> (String, Vec<Value>) {
    let (mut clauses, mut params): (Vec<String>, Vec<Value>) = match self.criteria {
      QueryCriteria::Id(id) => (vec!["id = ?".into()], vec![Value::Integer(id)]),
      QueryCriteria::User(user_id) => (vec!["user_id = ?".into()], vec![Value::Integer(user_id)]),
      QueryCriteria::Text(text) => {
        let pattern = like_pattern(text);
        let columns = ["title", "abstract_text", "keywords", "authors", "venue"];
        let clause = columns
          .iter()
          .map(|column| format!("{column} LIKE ? ESCAPE '\\'"))
          .collect::<Vec<_>>()
          .join(" OR ");
        (vec![format!("({clause})")], vec![Value::Text(pattern); columns.len()])
      },
      QueryCriteria::Author(name) =>
        (vec!["authors LIKE ? ESCAPE '\\'".into()], vec![Value::Text(like_pattern(name))]),
      QueryCriteria::Year(year) => (vec!["year = ?".into()], vec![Value::Integer(year.into())]),
      QueryCriteria::Area(area) =>
        (vec!["research_area = ? COLLATE NOCASE".into()], vec![Value::Text(area.to_string())]),
      QueryCriteria::Doi(doi) => (vec!["doi = ?".into()], vec![Value::Text(doi.to_string())]),
      QueryCriteria::All => (Vec::new(), Vec::new()),
    };

    if let Some(user_id) = self.user_id {
      clauses.push("user_id = ?".into());
      params.push(Value::Integer(user_id));
    }

    let mut sql = format!("SELECT {PUBLICATION_COLUMNS} FROM publications");
    if !clauses.is_empty() {
      sql.push_str(" WHERE ");
      sql.push_str(&clauses.join(" AND "));
    }

    match self.order_by {
      Some(field) => {
        let direction = if self.descending { "DESC" } else { "ASC" };
        sql.push_str(&format!(
          " ORDER BY {} {direction}, created_at DESC, id DESC",
          field.as_sql_str()
        ));
      },
      None => sql.push_str(" ORDER BY created_at DESC, id DESC"),
    }

    (sql, params)
  }
}

/// Wraps `text` in `%` wildcards, escaping the LIKE metacharacters it holds.
fn like_pattern(text: &str) -> String {
  let mut pattern = String::with_capacity(text.len() + 2);
  pattern.push('%');
  for c in text.chars() {
    if matches!(c, '%' | '_' | '\\') {
      pattern.push('\\');
    }
    pattern.push(c);
  }
  pattern.push('%');
  pattern
}

#[async_trait]
impl DatabaseInstruction for Query<'_> {
  type Output = Vec<Publication>;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let (sql, params) = self.build_sql();
    trace!("Running publication query: {sql}");

    let publications = db
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(&sql)?;
        let publications = stmt
          .query_map(params_from_iter(params), publication_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(publications)
      })
      .await?;

    Ok(publications)
  }
}
