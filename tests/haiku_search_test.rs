// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end tests of the haiku equation search.

mod common;

use std::collections::HashSet;

use common::n;
use haiku_search::memo::Line;
use haiku_search::render::{line_syllables, render_solution_with};
use haiku_search::state::statistics::Counters;
use haiku_search::{
    build_syllable_table, find_haiku_equations, find_with_config, render_solution, HaikuForm,
    Number, SearchConfig, SearchContext, ZeroStyle,
};

#[test]
fn test_every_solution_is_a_haiku() {
    let table = build_syllable_table();
    let solutions = find_haiku_equations().unwrap();
    assert_eq!(solutions.len(), 279);

    for solution in &solutions {
        let [a, b, c] = solution.lines().map(u32::from);
        assert_eq!(a + b, c, "{}", solution);
        assert!(c <= 9999);
        assert_eq!(
            solution.lines().map(|x| table.of(x)),
            [5, 6, 3],
            "{}",
            solution
        );
        assert_eq!(line_syllables(solution).unwrap(), [5, 7, 5], "{}", solution);
        assert!(solution.satisfies(&table, &HaikuForm::CLASSIC));
    }
}

#[test]
fn test_solutions_are_unique() {
    let solutions = find_haiku_equations().unwrap();
    let distinct: HashSet<_> = solutions.iter().collect();
    assert_eq!(distinct.len(), solutions.len());
}

#[test]
fn test_matches_brute_force_over_domains() {
    let ctx = SearchContext::new();
    let domains = &ctx.memo.domains;

    let mut expected = Vec::new();
    for &a in domains.candidates(Line::First) {
        for &b in domains.candidates(Line::Second) {
            if let Some(c) = a.checked_add(b) {
                if ctx.memo.table.of(c) == 3 {
                    expected.push([a, b, c]);
                }
            }
        }
    }

    let found: Vec<[Number; 3]> = find_haiku_equations()
        .unwrap()
        .iter()
        .map(|s| s.lines())
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn test_known_solutions() {
    let solutions = find_haiku_equations().unwrap();
    let with_first = |a: u32| -> Vec<[u16; 3]> {
        solutions
            .iter()
            .filter(|s| s.first() == n(a))
            .map(|s| s.lines().map(Number::get))
            .collect()
    };

    assert_eq!(with_first(8016), vec![[8016, 984, 9000]]);
    assert_eq!(with_first(107).len(), 6);
    assert!(with_first(100).is_empty());
}

#[test]
fn test_render_first_solution() {
    let solutions = find_haiku_equations().unwrap();
    assert_eq!(
        render_solution(&solutions[0]),
        "one hundred seven\nplus one hundred ninety three\nequals three hundred\n"
    );
    // No zero appears in a 5-7-5 solution, so the style makes no difference
    assert_eq!(
        render_solution_with(&solutions[0], ZeroStyle::Word),
        render_solution(&solutions[0])
    );
}

#[test]
fn test_other_forms() {
    let five_five_five = find_with_config(&SearchConfig {
        form: HaikuForm::new(5, 5, 5),
        ..SearchConfig::default()
    })
    .unwrap();
    assert_eq!(five_five_five.solutions.len(), 47);
    assert_eq!(five_five_five.statistics.get(Counters::Solutions), 47);

    let four_six_four = find_with_config(&SearchConfig {
        form: "4,6,4".parse().unwrap(),
        ..SearchConfig::default()
    })
    .unwrap();
    assert!(four_six_four.solutions.is_empty());
}

#[test]
fn test_statistics_account_for_every_pair() {
    let report = find_with_config(&SearchConfig::default()).unwrap();
    let checks = report.statistics.get(Counters::JoinChecks);
    let rejected = report.statistics.get(Counters::SumRejected);
    let solutions = report.statistics.get(Counters::Solutions);
    assert_eq!(checks, 256_142);
    assert_eq!(checks, rejected + solutions);
}

#[test]
fn test_no_step_limit() {
    let report = find_with_config(&SearchConfig {
        step_limit: None,
        ..SearchConfig::default()
    })
    .unwrap();
    assert_eq!(report.solutions.len(), 279);
}
