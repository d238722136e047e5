//! Grouping publications into the named buckets of a summary.
//!
//! A summary partitions a user's publications by one dimension, chosen with
//! [`GroupBy`], and orders the resulting groups deterministically:
//!
//! - [`GroupBy::Year`]: one group per year, most recent year first
//! - [`GroupBy::Type`]: one group per publication type, alphabetical
//! - [`GroupBy::Area`]: one group per research area, alphabetical, with
//!   publications lacking an area collected under `"Uncategorized"`
//! - [`GroupBy::Unfiltered`]: a single `"All Publications"` group
//!
//! Within a group publications keep the order they were given in.
//!
//! # Examples
//!
//! ```
//! use scholar::{
//!   publication::Publication,
//!   summary::{group, GroupBy},
//! };
//!
//! let publications = vec![
//!   Publication::new(1, "A", "Journal", 2021),
//!   Publication::new(1, "B", "Journal", 2023),
//!   Publication::new(1, "C", "Conference", 2021),
//! ];
//!
//! let grouped = group(&publications, GroupBy::Year);
//! assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["2023", "2021"]);
//! assert_eq!(grouped.get("2021").unwrap().len(), 2);
//! ```

use std::collections::HashMap;

use super::*;

/// Group key for publications without a research area.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Group key used when publications are not partitioned.
pub const ALL_PUBLICATIONS: &str = "All Publications";

/// The dimension publications are grouped by.
///
/// Parsing never fails: `"year"`, `"type"` and `"area"` select their
/// dimension and any other string selects [`GroupBy::Unfiltered`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
  /// By publication year
  #[default]
  Year,
  /// By publication type
  Type,
  /// By research area
  Area,
  /// Everything in one group
  Unfiltered,
}

impl GroupBy {
  /// Derives the group key of `publication` for this dimension.
  pub fn key_for(&self, publication: &Publication) -> String {
    match self {
      GroupBy::Year => publication.year.to_string(),
      GroupBy::Type => publication.publication_type.clone(),
      GroupBy::Area => publication.research_area.clone().unwrap_or_else(|| UNCATEGORIZED.into()),
      GroupBy::Unfiltered => ALL_PUBLICATIONS.into(),
    }
  }
}

impl FromStr for GroupBy {
  type Err = std::convert::Infallible;

  fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
    Ok(match s {
      "year" => GroupBy::Year,
      "type" => GroupBy::Type,
      "area" => GroupBy::Area,
      // TODO: confirm the UI relies on this fallback before turning unknown filters into errors
      _ => GroupBy::Unfiltered,
    })
  }
}

impl From<&str> for GroupBy {
  fn from(s: &str) -> Self {
    match s.parse() {
      Ok(by) => by,
      Err(never) => match never {},
    }
  }
}

impl Display for GroupBy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      GroupBy::Year => write!(f, "year"),
      GroupBy::Type => write!(f, "type"),
      GroupBy::Area => write!(f, "area"),
      GroupBy::Unfiltered => write!(f, "all"),
    }
  }
}

/// One named group of a summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
  /// The group's key, also its heading
  pub key:          String,
  /// Publications in the group, in input order
  pub publications: Vec<&'a Publication>,
}

impl Group<'_> {
  /// Number of publications in the group.
  pub fn len(&self) -> usize { self.publications.len() }

  /// Whether the group has no publications. Groups built by [`group`] never are.
  pub fn is_empty(&self) -> bool { self.publications.is_empty() }

  /// Year of the group's first publication, used to order year groups.
  fn year(&self) -> Option<i32> { self.publications.first().map(|publication| publication.year) }
}

/// Publications partitioned into ordered groups.
///
/// Iterating yields the groups in summary order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedPublications<'a> {
  /// Groups in summary order
  groups: Vec<Group<'a>>,
}

impl<'a> GroupedPublications<'a> {
  /// Number of groups.
  pub fn len(&self) -> usize { self.groups.len() }

  /// Whether there are no groups, which only happens for an empty input.
  pub fn is_empty(&self) -> bool { self.groups.is_empty() }

  /// Iterates the groups in summary order.
  pub fn iter(&self) -> std::slice::Iter<'_, Group<'a>> { self.groups.iter() }

  /// Iterates the group keys in summary order.
  pub fn keys(&self) -> Keys<'_, 'a> { Keys { inner: self.groups.iter() } }

  /// Looks up the publications of the group named `key`.
  pub fn get(&self, key: &str) -> Option<&[&'a Publication]> {
    self.groups.iter().find(|g| g.key == key).map(|g| g.publications.as_slice())
  }
}

impl<'a, 'g> IntoIterator for &'g GroupedPublications<'a> {
  type IntoIter = std::slice::Iter<'g, Group<'a>>;
  type Item = &'g Group<'a>;

  fn into_iter(self) -> Self::IntoIter { self.groups.iter() }
}

/// Iterator over the keys of [`GroupedPublications`].
pub struct Keys<'g, 'a> {
  /// Underlying group iterator
  inner: std::slice::Iter<'g, Group<'a>>,
}

impl<'g> Iterator for Keys<'g, '_> {
  type Item = &'g str;

  fn next(&mut self) -> Option<Self::Item> { self.inner.next().map(|g| g.key.as_str()) }
}

/// Partitions `publications` by `by` and orders the groups.
///
/// Year groups are ordered by descending year, every other dimension by
/// ascending key. An empty input gives an empty result.
pub fn group(publications: &[Publication], by: GroupBy) -> GroupedPublications<'_> {
  let mut groups: Vec<Group<'_>> = Vec::new();
  let mut index: HashMap<String, usize> = HashMap::new();

  for publication in publications {
    let key = by.key_for(publication);
    match index.get(&key) {
      Some(&position) => groups[position].publications.push(publication),
      None => {
        index.insert(key.clone(), groups.len());
        groups.push(Group { key, publications: vec![publication] });
      },
    }
  }

  match by {
    GroupBy::Year => groups.sort_by(|a, b| b.year().cmp(&a.year())),
    _ => groups.sort_by(|a, b| a.key.cmp(&b.key)),
  }

  trace!("Grouped {} publications by {by} into {} groups", publications.len(), groups.len());
  GroupedPublications { groups }
}
