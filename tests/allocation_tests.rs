//! Allocation engine and goal converter integration tests

use relcalc::core::allocation::{allocate, allocation_goal, foo_weight};
use relcalc::core::goal::{convert_goal, from_reliability_goal};
use relcalc::entities::{AllocationMethod, AllocationRecord, GoalMeasure};

fn child(hardware_id: i32) -> AllocationRecord {
    AllocationRecord {
        hardware_id,
        mission_time: 100.0,
        ..AllocationRecord::default()
    }
}

#[test]
fn equal_allocation_across_four_children_conserves_goal() {
    let goal = 0.99;
    let children: Vec<AllocationRecord> = (1..=4)
        .map(|id| {
            let mut c = child(id);
            c.weight_factor = 0.25;
            c
        })
        .collect();

    let mut product = 1.0;
    for c in &children {
        let (result, diags) = allocate(AllocationMethod::Equal, goal, 0.0, c);
        assert!(diags.is_empty());
        product *= result.reliability_alloc;
    }
    assert!((product - goal).abs() < 1.0e-9);
}

#[test]
fn foo_percentages_sum_to_one_over_included_children() {
    let mut a = child(1);
    a.int_factor = 6;
    a.soa_factor = 2;
    a.op_time_factor = 9;
    a.env_factor = 3;
    let mut b = child(2);
    b.int_factor = 5;
    b.soa_factor = 6;
    b.op_time_factor = 4;
    b.env_factor = 5;
    let mut excluded = child(3);
    excluded.included = false;

    let children = [a, b, excluded];
    let cumulative: f64 = children.iter().map(foo_weight).sum();
    assert_eq!(cumulative, 924.0);

    let mut percent_total = 0.0;
    let mut rate_total = 0.0;
    for c in &children {
        let (result, diags) = allocate(AllocationMethod::Foo, 0.000617, cumulative, c);
        assert!(diags.is_empty());
        percent_total += result.percent_weight_factor;
        rate_total += result.hazard_rate_alloc;
    }
    assert!((percent_total - 1.0).abs() < 1.0e-12);
    assert!((rate_total - 0.000617).abs() < 1.0e-15);
}

#[test]
fn arinc_weights_reproduce_the_observed_fractions() {
    let observed = [0.000628, 0.001053, 0.001000];
    let total: f64 = observed.iter().sum();
    let goal = 0.000617;

    let mut allocated = 0.0;
    for (i, rate) in observed.iter().enumerate() {
        let mut c = child(i as i32 + 1);
        c.weight_factor = rate / total;
        let (result, diags) = allocate(AllocationMethod::Arinc, goal, 0.0, &c);
        assert!(diags.is_empty());
        allocated += result.hazard_rate_alloc;
    }
    assert!((allocated - goal).abs() < 1.0e-15);
}

#[test]
fn agree_mtbf_shrinks_with_more_elements() {
    let mut two = child(1);
    two.n_sub_systems = 4;
    two.n_sub_elements = 2;
    let mut four = child(2);
    four.n_sub_systems = 4;
    four.n_sub_elements = 4;

    let (res_two, _) = allocate(AllocationMethod::Agree, 0.995, 0.0, &two);
    let (res_four, _) = allocate(AllocationMethod::Agree, 0.995, 0.0, &four);
    assert!(res_four.mtbf_alloc < res_two.mtbf_alloc);
    assert!((res_four.mtbf_alloc * 2.0 - res_two.mtbf_alloc).abs() < 1.0e-9);
}

#[test]
fn allocation_goal_reads_the_measure_the_method_expects() {
    let mut c = child(1);
    c.goal_measure = GoalMeasure::Reliability;
    c.reliability_goal = 0.99;
    c.hazard_rate_goal = 0.002;
    assert_eq!(allocation_goal(AllocationMethod::Equal, &c), 0.99);
    assert_eq!(allocation_goal(AllocationMethod::Foo, &c), 0.002);
}

#[test]
fn goal_triple_is_self_consistent() {
    let mut diags = Vec::new();
    let (r, hr, mtbf) = convert_goal(GoalMeasure::Reliability, 100.0, 0.99732259, &mut diags);
    assert!(diags.is_empty());
    assert_eq!(r, 0.99732259);
    assert!((mtbf - 37299.50574704313).abs() < 1.0e-6);
    assert!((hr * mtbf - 1.0).abs() < 1.0e-12);

    // And back again through the MTBF form.
    let (mtbf2, hr2) = from_reliability_goal(100.0, r, &mut diags);
    assert_eq!(mtbf, mtbf2);
    assert_eq!(hr, hr2);
}
