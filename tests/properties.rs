use miniid3::prelude::*;
use miniid3::{AttributeDomains, Node};

use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};


fn sample_strategy() -> impl Strategy<Value = Sample> {
    (1_usize..4)
        .prop_flat_map(|n_feature| {
            let features = prop::collection::vec(
                prop::sample::select(vec!["a", "b", "c"]),
                n_feature,
            );
            let label = prop::sample::select(vec!["Yes", "No", "Maybe"]);
            prop::collection::vec((features, label), 1..30)
        })
        .prop_map(|pairs| Sample::from_pairs(pairs).unwrap())
}


// Checks that no attribute repeats along a path and
// that every branch key is in the training domain.
fn check_paths(node: &Node, domains: &AttributeDomains, used: &mut Vec<usize>) {
    if let Node::Branch { attribute, branches, .. } = node {
        assert!(!used.contains(attribute), "x[{attribute}] is tested twice");
        used.push(*attribute);
        for (value, child) in branches {
            assert!(domains.contains(*attribute, value));
            check_paths(child, domains, used);
        }
        used.pop();
    }
}


proptest! {
    #[test]
    fn information_gain_is_nonnegative(sample in sample_strategy()) {
        let indices = (0..sample.shape().0).collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(0);
        for attribute in 0..sample.shape().1 {
            let score = SplitBy::InformationGain
                .importance(&sample, &indices, attribute, &mut rng);
            prop_assert!(score >= 0.0);
        }
    }


    #[test]
    fn pure_sample_is_a_leaf(sample in sample_strategy()) {
        let relabeled = sample.iter()
            .map(|example| Example::new(example.features().to_vec(), "Yes"))
            .collect::<Vec<_>>();
        let relabeled = Sample::new(relabeled).unwrap();

        let candidates = (0..relabeled.shape().1).collect::<Vec<_>>();
        let node = DecisionTreeBuilder::new()
            .build()
            .build(&relabeled, &candidates, &relabeled)
            .unwrap();
        prop_assert_eq!(node, Node::leaf("Yes"));
    }


    #[test]
    fn training_is_deterministic(sample in sample_strategy()) {
        let tree = DecisionTreeBuilder::new().build();
        let f = tree.fit(&sample).unwrap();
        let g = tree.fit(&sample).unwrap();
        prop_assert_eq!(f, g);
    }


    #[test]
    fn tree_respects_structural_invariants(sample in sample_strategy()) {
        for branching in [Branching::Observed, Branching::Exhaustive] {
            let f = DecisionTreeBuilder::new()
                .branching(branching)
                .build()
                .fit(&sample)
                .unwrap();
            prop_assert!(f.depth() <= sample.shape().1);
            check_paths(f.root(), f.domains(), &mut Vec::new());

            let acc = accuracy(&f, &sample).unwrap();
            prop_assert!((0.0..=1.0).contains(&acc));
        }
    }
}
