use super::*;

#[test]
fn selection_is_monotone_in_ang_resl() {
    let mut prev = select_ori_nside(&COVRAD_QUAT_BCC7, MULT_QUAT_BCC7, 100.0, CAP_QUAT_BCC7);
    let mut ang_resl = 100.0;
    while ang_resl > 0.01 {
        ang_resl /= 2.0;
        let chosen = select_ori_nside(&COVRAD_QUAT_BCC7, MULT_QUAT_BCC7, ang_resl, CAP_QUAT_BCC7);
        assert!(chosen >= prev, "halving ang_resl decreased ori_nside: {prev} -> {chosen}");
        prev = chosen;
    }
}

#[test]
fn selection_never_exceeds_cap() {
    let chosen = select_ori_nside(&COVRAD_BT24_BCC3, MULT_BT24_BCC3, 1e-6, CAP_BT24);
    assert!(chosen <= CAP_BT24);
}

#[test]
fn selection_starts_at_one_for_coarse_resolution() {
    let chosen = select_ori_nside(&COVRAD_QUAT_BCC7, MULT_QUAT_BCC7, 1000.0, CAP_QUAT_BCC7);
    assert_eq!(chosen, 1);
}
