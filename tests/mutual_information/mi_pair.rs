use approx::assert_abs_diff_eq;
use fastmim::Error;
use fastmim::estimators::GlobalValue;
use fastmim::estimators::approaches::{DiscreteDataset, IndexBase};
use fastmim::estimators::entropy::Estimator;
use fastmim::estimators::mutual_information::{MiMatrixBuilder, MutualInformation};

use crate::test_helpers::generate_random_codes;

#[test]
fn pair_matches_matrix_entries() {
    let data = generate_random_codes(35, 5, 4, 17);
    for estimator in Estimator::ALL {
        let builder = MiMatrixBuilder::new(estimator).threads(2);
        let mim = builder.compute(data.view()).unwrap();
        for i in 0..5 {
            for j in 0..5 {
                let mi = builder.pair(data.view(), i, j).unwrap();
                assert_abs_diff_eq!(mi, mim[[i, j]], epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn factory_pair_estimators_agree_with_builder() {
    let data = generate_random_codes(50, 3, 3, 4);
    let dataset = DiscreteDataset::from_data(data.view(), IndexBase::OneBased).unwrap();

    let mle = MutualInformation::new_discrete_mle(&dataset, 0, 2).global_value();
    let shr = MutualInformation::new_discrete_shrink(&dataset, 0, 2).global_value();
    let mm = MutualInformation::new_discrete_miller_madow(&dataset, 0, 2).global_value();
    let cs = MutualInformation::new_discrete_chao_shen(&dataset, 0, 2).global_value();

    let pair = |estimator: Estimator| {
        MiMatrixBuilder::new(estimator)
            .pair(data.view(), 0, 2)
            .unwrap()
    };
    assert_abs_diff_eq!(mle, pair(Estimator::MaximumLikelihood), epsilon = 1e-12);
    assert_abs_diff_eq!(shr, pair(Estimator::Shrinkage), epsilon = 1e-12);
    assert_abs_diff_eq!(mm.max(0.0), pair(Estimator::MillerMadow), epsilon = 1e-12);
    assert_abs_diff_eq!(cs.max(0.0), pair(Estimator::ChaoShen), epsilon = 1e-12);
}

#[test]
fn self_pair_reduces_to_marginal_entropy() {
    let data = generate_random_codes(30, 4, 4, 9);
    let dataset = DiscreteDataset::from_data(data.view(), IndexBase::OneBased).unwrap();
    let builder = MiMatrixBuilder::new(Estimator::MaximumLikelihood);
    let h = builder.marginal_entropies(data.view()).unwrap();
    for i in 0..4 {
        let mi = MutualInformation::new_discrete_mle(&dataset, i, i).global_value();
        assert_abs_diff_eq!(mi, h[i], epsilon = 1e-12);
        let mm = MutualInformation::new_discrete_miller_madow(&dataset, i, i).global_value();
        let h_mm = MiMatrixBuilder::new(Estimator::MillerMadow)
            .marginal_entropies(data.view())
            .unwrap();
        assert_abs_diff_eq!(mm, h_mm[i], epsilon = 1e-12);
    }
}

#[test]
fn pair_rejects_out_of_range_variable() {
    let data = generate_random_codes(10, 3, 2, 1);
    let err = MiMatrixBuilder::new(Estimator::MaximumLikelihood)
        .pair(data.view(), 1, 3)
        .err();
    assert!(matches!(
        err,
        Some(Error::VariableOutOfRange {
            index: 3,
            n_variables: 3
        })
    ));
}
