use sortbench::{
    data::NEARLY_SORTED_SWAPS, generate, BenchError, DataGenerator, Distribution,
};

#[test]
fn sorted_and_reverse_shapes() {
    assert_eq!(generate(5, Distribution::Sorted, None), vec![0, 1, 2, 3, 4]);
    assert_eq!(generate(5, Distribution::Reverse, None), vec![4, 3, 2, 1, 0]);
}

#[test]
fn empty_size_for_every_distribution() {
    for distribution in Distribution::ALL {
        assert!(generate(0, distribution, Some(1)).is_empty());
        assert!(generate(0, distribution, None).is_empty());
    }
}

#[test]
fn random_values_stay_in_range() {
    let data = generate(1000, Distribution::Random, Some(9));
    assert_eq!(data.len(), 1000);
    assert!(data.iter().all(|&v| (0..1000).contains(&v)));
    assert_eq!(generate(1, Distribution::Random, Some(9)), vec![0]);
}

#[test]
fn same_seed_same_sequence() {
    for distribution in Distribution::ALL {
        let a = generate(2000, distribution, Some(1234));
        let b = generate(2000, distribution, Some(1234));
        assert_eq!(a, b);
    }
    assert_ne!(
        generate(2000, Distribution::Random, Some(1)),
        generate(2000, Distribution::Random, Some(2))
    );
}

#[test]
fn generator_reports_its_seed() {
    assert_eq!(DataGenerator::new(Some(77)).seed(), 77);
    let mut a = DataGenerator::new(None);
    let mut b = DataGenerator::new(Some(a.seed()));
    assert_eq!(
        a.generate(100, Distribution::Random),
        b.generate(100, Distribution::Random)
    );
}

#[test]
fn nearly_sorted_is_a_lightly_swapped_permutation() {
    let data = generate(100, Distribution::NearlySorted, Some(5));
    let mut sorted = data.clone();
    sorted.sort();
    assert_eq!(sorted, (0..100).collect::<Vec<i64>>());
    let displaced = data.iter().enumerate().filter(|&(i, &v)| i as i64 != v).count();
    assert!(displaced <= 2 * NEARLY_SORTED_SWAPS);
    assert_eq!(data, generate(100, Distribution::NearlySorted, Some(5)));
    // a single element can only swap with itself
    assert_eq!(generate(1, Distribution::NearlySorted, Some(5)), vec![0]);
}

#[test]
fn distribution_names() {
    assert_eq!("random".parse::<Distribution>().unwrap(), Distribution::Random);
    assert_eq!("reverse".parse::<Distribution>().unwrap(), Distribution::Reverse);
    assert_eq!(
        "nearly-sorted".parse::<Distribution>().unwrap(),
        Distribution::NearlySorted
    );
    assert_eq!(
        "nearly_sorted".parse::<Distribution>().unwrap(),
        Distribution::NearlySorted
    );
    assert_eq!(Distribution::NearlySorted.to_string(), "nearly_sorted");
    assert!(matches!(
        "shuffled".parse::<Distribution>(),
        Err(BenchError::UnknownDistribution(_))
    ));
}
