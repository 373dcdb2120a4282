use russell_lab::approx_eq;
use uniax::prelude::*;

// Voce yield stress and its saturation value
fn voce_yield(peq: f64) -> f64 {
    300.0 + 5000.0 * peq + 125.0 * (1.0 - f64::exp(-1000.0 * peq))
}

#[test]
fn ramp_satisfies_yield_surface_consistency() -> Result<(), StrError> {
    let config = Config::new();
    let param = ParamUniaxial::sample_steel_voce();
    let model = Elastoplastic1D::new(&config, &param)?;
    let mut updater = Updater::new(model);

    let path = LoadingPath::new_linear(0.05, 100)?;
    let history = updater.follow_strain(path.strains())?;

    for i in 1..history.states.len() {
        let state = &history.states[i];
        assert!(state.peq >= history.states[i - 1].peq);
        approx_eq(state.strain, state.stress / 200e3 + state.eps_plastic, 1e-13);
        if state.elastic {
            // elastic response below the initial yield stress
            assert!(f64::abs(state.stress) <= 300.0 + 1e-10);
            assert_eq!(state.peq, history.states[i - 1].peq);
        } else {
            // the stress sits on the expanded yield surface
            approx_eq(f64::abs(state.stress), voce_yield(state.peq), 1e-9);
        }
    }

    // far past saturation, the exponential term is exhausted
    let last = history.states.last().unwrap();
    assert!(last.peq > 0.04);
    approx_eq(last.stress, 300.0 + 5000.0 * last.peq + 125.0, 1e-8);
    Ok(())
}

#[test]
fn tightening_tolerances_does_not_change_the_results() -> Result<(), StrError> {
    let param = ParamUniaxial::sample_steel_voce();
    let path = LoadingPath::new_linear(0.05, 50)?;

    let mut config_loose = Config::new();
    config_loose.set_fun_tol(1e-6).set_step_tol(1e-6);
    let model = Elastoplastic1D::new(&config_loose, &param)?;
    let mut updater = Updater::new(model);
    let history_loose = updater.follow_strain(path.strains())?;

    let config_tight = Config::new(); // 1e-12 tolerances
    let model = Elastoplastic1D::new(&config_tight, &param)?;
    let mut updater = Updater::new(model);
    let history_tight = updater.follow_strain(path.strains())?;

    for i in 0..history_loose.stress.dim() {
        let diff = f64::abs(history_loose.stress[i] - history_tight.stress[i]);
        assert!(diff < 1e-3);
    }
    Ok(())
}

#[test]
fn sub_stepping_recovers_from_non_convergence() -> Result<(), StrError> {
    // with a tiny iteration budget, a large increment fails but the last
    // iterate is reported; smaller increments then converge
    let mut config = Config::new();
    config.set_n_max_iterations(2);
    let param = ParamUniaxial::sample_steel_voce();
    let mut model = Elastoplastic1D::new(&config, &param)?;
    let mut state = LocalState::new();
    let res = model.update_stress(&mut state, 0.02);
    assert_eq!(res.err(), Some("Newton-Raphson did not converge in the return mapping"));
    assert!(state.algo_lambda > 0.0);

    // retry from the virgin state with sub-steps and a restored budget
    let config = Config::new();
    let mut model = Elastoplastic1D::new(&config, &param)?;
    let mut state = LocalState::new();
    for i in 1..=20 {
        model.update_stress(&mut state, 0.001 * (i as f64))?;
    }
    approx_eq(f64::abs(state.stress), voce_yield(state.peq), 1e-6);
    Ok(())
}
