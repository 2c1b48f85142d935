// Integration tests for mindrec
use mindrec::loader::load_catalog;
use mindrec::{
    Catalog, Error, EvalConfig, Evaluator, Normalizer, RankingSession, RelevanceJudge,
    SessionConfig,
};
use std::io::Write;

fn space_catalog() -> Catalog {
    Catalog::from_records([
        ("Alien Dawn", "space horror alien crew ship dark"),
        ("Void Station", "space station alien crew repair"),
        ("Star Freight", "space cargo crew smuggling ship"),
        ("Meadow Song", "romance countryside music summer"),
        ("Harvest Home", "countryside family summer drama"),
        ("Blank Reel", ""),
    ])
}

fn build_session(catalog: Catalog) -> RankingSession {
    let config = SessionConfig {
        max_features: 1000,
        stop_words: Default::default(),
    };
    RankingSession::build(catalog, &Normalizer::default(), &config).unwrap()
}

#[test]
fn test_session_build_and_recommend() {
    let session = build_session(space_catalog());

    assert_eq!(session.catalog().len(), 6);
    assert!(session.vocabulary().len() > 0);

    let titles = session.recommend("Alien Dawn", 2).unwrap();
    assert_eq!(titles.len(), 2);
    // The other space-crew movies should outrank the countryside ones.
    assert!(titles.contains(&"Void Station".to_string()));
    assert!(titles.contains(&"Star Freight".to_string()));
}

#[test]
fn test_recommend_unknown_title_is_typed_not_found() {
    let session = build_session(space_catalog());
    let err = session.recommend("No Such Film", 3).unwrap_err();
    assert!(matches!(err, Error::TitleNotFound(title) if title == "No Such Film"));
}

#[test]
fn test_matrix_invariants_end_to_end() {
    let session = build_session(space_catalog());
    let matrix = session.similarity();

    for i in 0..matrix.len() {
        for j in 0..matrix.len() {
            let sim = matrix.value(i, j).unwrap();
            assert!((0.0..=1.0).contains(&sim));
            assert_eq!(sim.to_bits(), matrix.value(j, i).unwrap().to_bits());
        }
    }

    // Tagged items have a unit diagonal; the untagged one is zero.
    assert_eq!(matrix.value(0, 0), Some(1.0));
    let blank = session.catalog().find_by_title("Blank Reel").unwrap().index;
    assert_eq!(matrix.value(blank, blank), Some(0.0));
}

#[test]
fn test_evaluation_over_catalog() {
    let session = build_session(space_catalog());
    let evaluator = Evaluator::new(EvalConfig { k: 2, min_common: 3 });
    let report = evaluator.run(&session).unwrap();

    assert_eq!(report.queries, 6);
    assert!(report.mean_precision > 0.0);
    assert!(report.mean_ndcg > 0.0);
    assert!(report.coverage > 0.0 && report.coverage <= 1.0);
    assert!((0.0..=1.0).contains(&report.diversity));
}

#[test]
fn test_relevance_judgment_matches_recommendations() {
    let session = build_session(space_catalog());
    let judge = RelevanceJudge::new(3);

    let query = session.catalog().find_by_title("Alien Dawn").unwrap();
    let ranked = session.recommend_by_index(query.index, 1).unwrap();
    let best = session.catalog().get(ranked[0]).unwrap();

    // The top recommendation shares at least three tags with the query.
    assert!(judge.is_relevant(&query.tags, &best.tags));
}

#[test]
fn test_load_catalog_and_recommend_from_csv() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "title,tags").unwrap();
    writeln!(file, "Alien Dawn,space horror alien crew").unwrap();
    writeln!(file, "Void Station,space station alien crew").unwrap();
    writeln!(file, "Meadow Song,romance countryside music").unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    let session = build_session(catalog);

    let titles = session.recommend("Alien Dawn", 1).unwrap();
    assert_eq!(titles, vec!["Void Station".to_string()]);
}

#[test]
fn test_sessions_do_not_share_state() {
    let a = build_session(space_catalog());
    let b = build_session(Catalog::from_records([
        ("Only One", "single item catalog"),
        ("Other One", "single item catalog"),
    ]));

    assert_eq!(a.catalog().len(), 6);
    assert_eq!(b.catalog().len(), 2);
    assert_eq!(
        b.recommend("Only One", 5).unwrap(),
        vec!["Other One".to_string()]
    );
}

#[test]
fn test_session_is_shareable_across_threads() {
    let session = std::sync::Arc::new(build_session(space_catalog()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let session = session.clone();
            std::thread::spawn(move || {
                for index in 0..session.catalog().len() {
                    let ranked = session.recommend_by_index(index, 3).unwrap();
                    assert!(!ranked.contains(&index));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
