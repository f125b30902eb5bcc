#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Concurrent access to one service instance

mod common;

use std::sync::Arc;

use common::{create_service, grade};
use grades_sdk::GradeFields;

const TASKS: usize = 32;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_adds_of_same_pair_succeed_once() {
    let service = create_service();

    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.add_grade(grade("123", "CIC0001", 9.5)).is_ok() })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(service.grade_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_distinct_adds_all_land() {
    let service = create_service();

    let handles: Vec<_> = (0..TASKS)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .add_grade(grade("123", &format!("CIC{i:04}"), 5.0))
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(service.list_student_grades("123").unwrap().len(), TASKS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_changes_race_with_reads() {
    let service = create_service();
    service.add_grade(grade("123", "CIC0001", 0.0)).unwrap();

    let writer = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for step in 0..100_u32 {
                let fields = GradeFields {
                    year: 2025,
                    term: 1,
                    score: f64::from(step),
                };
                service.change_grade("123", "CIC0001", fields).unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    let reader = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for _ in 0..100 {
                let g = service.query_grade("123", "CIC0001").unwrap();
                assert!((0.0..100.0).contains(&g.score));
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();

    let last = service.query_grade("123", "CIC0001").unwrap();
    assert!((last.score - 99.0).abs() < f64::EPSILON);
}
