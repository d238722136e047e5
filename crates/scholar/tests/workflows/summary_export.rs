use scholar::{
  export::{generate_summary, Summary},
  render::Format,
  summary::GroupBy,
};

use super::*;

async fn stored_catalogue(scholar: &mut Scholar) -> TestResult<Vec<Publication>> {
  let publications = [
    Publication::new(1, "Older Survey", "Journal", 2019).with_authors("X").with_venue("V0"),
    Publication::new(1, "A", "Journal", 2023).with_authors("X").with_venue("V1"),
    Publication::new(1, "B", "Conference", 2021)
      .with_authors("Y")
      .with_venue("V2")
      .with_doi("10.1/xyz")
      .with_research_area("Systems"),
  ];
  for publication in &publications {
    Add::publication(publication).execute(&mut scholar.database).await?;
  }
  Ok(Query::by_user(1).execute(&mut scholar.database).await?)
}

#[traced_test]
#[tokio::test]
async fn test_web_summary_from_store() -> TestResult<()> {
  let (mut scholar, _dir) = create_test_scholar().await;
  let publications = stored_catalogue(&mut scholar).await?;

  let artifact = generate_summary(&publications, "web", "year")?;
  let html = String::from_utf8(artifact.content)?;

  let sections = ["<h2>2023</h2>", "<h2>2021</h2>", "<h2>2019</h2>"]
    .iter()
    .map(|section| html.find(section).unwrap())
    .collect::<Vec<_>>();
  assert!(sections.windows(2).all(|pair| pair[0] < pair[1]));
  assert!(html.contains("<a href=\"https://doi.org/10.1/xyz\">10.1/xyz</a>"));
  assert_eq!(html.matches("DOI:").count(), 1);

  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_area_summary_text() -> TestResult<()> {
  let (mut scholar, _dir) = create_test_scholar().await;
  let publications = stored_catalogue(&mut scholar).await?;

  let artifact = Summary::new(Format::Pdf, GroupBy::Area).generate(&publications);
  let text = String::from_utf8(artifact.content)?;

  let systems = text.find("Systems\n-------\n").unwrap();
  let uncategorized = text.find("Uncategorized\n-------------\n").unwrap();
  assert!(systems < uncategorized);
  assert!(text.contains("B\nAuthors: Y\nV2, 2021\nDOI: 10.1/xyz\n"));

  // Newest first within a group, as listed
  assert!(text.find("\nA\n").unwrap() < text.find("\nOlder Survey\n").unwrap());

  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_export_to_file() -> TestResult<()> {
  let (mut scholar, dir) = create_test_scholar().await;
  let publications = stored_catalogue(&mut scholar).await?;

  let artifact = generate_summary(&publications, "Word", "type")?;
  let path = dir.path().join(artifact.filename());
  std::fs::write(&path, &artifact.content)?;

  assert!(path.ends_with("publications_summary.docx"));
  assert_eq!(std::fs::read(&path)?, artifact.content);
  Ok(())
}

#[test]
fn test_unknown_format_produces_nothing() {
  let publications = vec![create_test_publication(1)];
  for format in ["xml", "", "html", "docx"] {
    assert!(matches!(
      generate_summary(&publications, format, "year"),
      Err(ScholarError::UnsupportedFormat(_))
    ));
  }
}
