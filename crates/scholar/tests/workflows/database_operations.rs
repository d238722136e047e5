use super::*;

/// Basic publication storage tests
mod basic_operations {
  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_add_and_get() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    let publication = create_test_publication(1);

    let id = Add::publication(&publication).execute(&mut scholar.database).await?;
    assert!(id > 0);

    let stored = Query::by_id(id).execute(&mut scholar.database).await?;
    assert_eq!(stored.len(), 1);

    let mut expected = publication.clone();
    expected.id = Some(id);
    assert_eq!(stored[0], expected);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_add_invalid_year() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    let mut publication = create_test_publication(1);
    publication.year = 99;

    let err = Add::publication(&publication).execute(&mut scholar.database).await.unwrap_err();
    assert!(matches!(err, ScholarError::InvalidYear(99)));
    assert!(Query::list_all().execute(&mut scholar.database).await?.is_empty());

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_add_duplicate_doi() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    let publication = create_test_publication(1);

    Add::publication(&publication).execute(&mut scholar.database).await?;
    let err = Add::publication(&publication).execute(&mut scholar.database).await.unwrap_err();
    assert!(matches!(err, ScholarError::DuplicatePublication(_)));

    // The same DOI in another user's catalogue is fine
    Add::publication(&create_test_publication(2)).execute(&mut scholar.database).await?;

    assert_eq!(Query::by_user(1).execute(&mut scholar.database).await?.len(), 1);
    assert_eq!(Query::list_all().execute(&mut scholar.database).await?.len(), 2);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_add_short_registrant_doi() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    let publication = Publication::new(1, "B", "Journal", 2021)
      .with_authors("Y")
      .with_venue("V2")
      .with_doi("10.1/xyz")
      .with_pdf_url("https://example.org/b.pdf");

    let id = Add::publication(&publication).execute(&mut scholar.database).await?;

    let stored = Query::by_doi("10.1/xyz").for_user(1).execute(&mut scholar.database).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, Some(id));
    assert_eq!(stored[0].pdf_url.as_deref(), Some("https://example.org/b.pdf"));

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_publications_without_doi_never_clash() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    let mut publication = create_test_publication(1);
    publication.doi = None;

    Add::publication(&publication).execute(&mut scholar.database).await?;
    Add::publication(&publication).execute(&mut scholar.database).await?;
    assert_eq!(Query::by_user(1).execute(&mut scholar.database).await?.len(), 2);

    Ok(())
  }
}

/// Query criteria and ordering
mod queries {
  use scholar::database::OrderField;

  use super::*;

  async fn seed(scholar: &mut Scholar) -> TestResult<Vec<i64>> {
    let publications = [
      Publication::new(1, "Graph Neural Networks", "Journal", 2021)
        .with_authors("Alice Smith")
        .with_venue("JMLR")
        .with_research_area("Machine Learning")
        .with_citation_count(40),
      Publication::new(1, "A Survey of 100% Coverage", "Conference", 2023)
        .with_authors("Bob Jones")
        .with_venue("ICSE")
        .with_keywords("testing, coverage")
        .with_citation_count(5),
      Publication::new(1, "Consensus in the Wild", "Journal", 2021)
        .with_authors("Alice Smith, Carol White")
        .with_venue("Distributed Computing")
        .with_abstract("We study NEURAL approaches to consensus."),
      Publication::new(2, "Unrelated Neural Work", "Book", 2019).with_authors("Dave Brown"),
    ];

    let mut ids = Vec::new();
    for publication in &publications {
      ids.push(Add::publication(publication).execute(&mut scholar.database).await?);
    }
    Ok(ids)
  }

  #[traced_test]
  #[tokio::test]
  async fn test_user_listing_newest_first() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    let ids = seed(&mut scholar).await?;

    let listed = Query::by_user(1).execute(&mut scholar.database).await?;
    let listed_ids = listed.iter().filter_map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(listed_ids, vec![ids[2], ids[1], ids[0]]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_text_search_case_insensitive() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    seed(&mut scholar).await?;

    let hits = Query::text("neural").for_user(1).execute(&mut scholar.database).await?;
    let titles = hits.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
    assert_eq!(titles, vec!["Consensus in the Wild", "Graph Neural Networks"]);

    let everyone = Query::text("NEURAL").execute(&mut scholar.database).await?;
    assert_eq!(everyone.len(), 3);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_text_search_matches_literal_wildcards() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    seed(&mut scholar).await?;

    let hits = Query::text("100%").execute(&mut scholar.database).await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].venue, "ICSE");

    assert!(Query::text("_").execute(&mut scholar.database).await?.is_empty());

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_author_year_area() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    seed(&mut scholar).await?;

    assert_eq!(Query::by_author("alice").execute(&mut scholar.database).await?.len(), 2);
    assert_eq!(Query::by_year(2021).execute(&mut scholar.database).await?.len(), 2);
    assert_eq!(Query::by_year(2021).for_user(2).execute(&mut scholar.database).await?.len(), 0);

    let area = Query::by_area("machine learning").execute(&mut scholar.database).await?;
    assert_eq!(area.len(), 1);
    assert_eq!(area[0].title, "Graph Neural Networks");

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_ordering() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    seed(&mut scholar).await?;

    let by_title =
      Query::by_user(1).order_by(OrderField::Title).execute(&mut scholar.database).await?;
    assert_eq!(by_title[0].title, "A Survey of 100% Coverage");

    let by_year =
      Query::by_user(1).order_by(OrderField::Year).descending().execute(&mut scholar.database).await?;
    assert_eq!(by_year.iter().map(|p| p.year).collect::<Vec<_>>(), vec![2023, 2021, 2021]);

    let cited = Query::by_user(1)
      .order_by(OrderField::Citations)
      .descending()
      .execute(&mut scholar.database)
      .await?;
    assert_eq!(cited[0].citation_count, Some(40));
    assert_eq!(cited[2].citation_count, None);

    Ok(())
  }
}

/// Editing stored publications
mod updates {
  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_update_fields() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    let id = Add::publication(&create_test_publication(1)).execute(&mut scholar.database).await?;

    let changes = PublicationChanges {
      title: Some("Renamed".into()),
      research_area: Some(None),
      citation_count: Some(Some(12)),
      ..Default::default()
    };
    let updated = Update::new(id, changes).execute(&mut scholar.database).await?;
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.research_area, None);

    let stored = Query::by_id(id).execute(&mut scholar.database).await?;
    assert_eq!(stored[0], updated);
    assert_eq!(stored[0].citation_count, Some(12));
    assert!(stored[0].updated_at >= stored[0].created_at);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_update_missing() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    let err = Update::new(404, PublicationChanges::default())
      .execute(&mut scholar.database)
      .await
      .unwrap_err();
    assert!(matches!(err, ScholarError::NotFound));
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_update_rejects_invalid_and_keeps_row() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    let publication = create_test_publication(1);
    let id = Add::publication(&publication).execute(&mut scholar.database).await?;

    let changes = PublicationChanges { year: Some(20_000), ..Default::default() };
    let err = Update::new(id, changes).execute(&mut scholar.database).await.unwrap_err();
    assert!(matches!(err, ScholarError::InvalidYear(20_000)));

    let stored = Query::by_id(id).execute(&mut scholar.database).await?;
    assert_eq!(stored[0].year, publication.year);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_update_to_taken_doi() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    Add::publication(&create_test_publication(1)).execute(&mut scholar.database).await?;
    let other = Publication::new(1, "Other", "Journal", 2020).with_doi("10.1000/other");
    let id = Add::publication(&other).execute(&mut scholar.database).await?;

    // Keeping its own DOI is not a clash
    let same = PublicationChanges { title: Some("Still other".into()), ..Default::default() };
    Update::new(id, same).execute(&mut scholar.database).await?;

    let taken = PublicationChanges {
      doi: Some(Some("10.1007/s00453-016-0221-0".into())),
      ..Default::default()
    };
    let err = Update::new(id, taken).execute(&mut scholar.database).await.unwrap_err();
    assert!(matches!(err, ScholarError::DuplicatePublication(_)));

    Ok(())
  }
}

/// Removing publications
mod removals {
  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_remove_by_id() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    let id = Add::publication(&create_test_publication(1)).execute(&mut scholar.database).await?;

    let removed = Remove::by_id(id).execute(&mut scholar.database).await?;
    assert_eq!(removed.len(), 1);
    assert!(Query::by_id(id).execute(&mut scholar.database).await?.is_empty());

    assert!(Remove::by_id(id).execute(&mut scholar.database).await?.is_empty());
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_dry_run_keeps_publications() -> TestResult<()> {
    let (mut scholar, _dir) = create_test_scholar().await;
    Add::publication(&create_test_publication(1)).execute(&mut scholar.database).await?;
    Add::publication(&Publication::new(1, "Second", "Book", 2001))
      .execute(&mut scholar.database)
      .await?;

    let would_remove =
      Remove::from_query(Query::by_user(1)).dry_run().execute(&mut scholar.database).await?;
    assert_eq!(would_remove.len(), 2);
    assert_eq!(Query::by_user(1).execute(&mut scholar.database).await?.len(), 2);

    let removed = Remove::from_query(Query::by_year(2001)).execute(&mut scholar.database).await?;
    assert_eq!(removed.len(), 1);
    assert_eq!(Query::by_user(1).execute(&mut scholar.database).await?.len(), 1);

    Ok(())
  }
}
