use reportcfg_engine::duration_ticks;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, InitViewModel, StatusBadge, TickStepViewModel,
    TicksViewModel,
};

pub fn present_ticks(values: &[f64]) -> CommandResultViewModel<TicksViewModel> {
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .reduce(f64::max);

    let step = duration_ticks(values).zip(max).map(|(ticks, max)| {
        let positions = ticks.ticks_up_to(max);
        TickStepViewModel {
            step_size: ticks.step_size,
            unit: ticks.unit.to_string(),
            base: ticks.base,
            labels: positions.iter().map(|&tick| ticks.format_tick(tick)).collect(),
            ticks: positions,
        }
    });

    CommandResultViewModel::new(TicksViewModel { max, step })
}

pub fn present_init(config_path: &Path, written: bool) -> CommandResultViewModel<InitViewModel> {
    let content = InitViewModel {
        config_path: config_path.display().to_string(),
        written,
    };

    if written {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success("Config written"))
            .with_suggestion(Guidance::new(
                "Add [[variables]] entries to expand the variable groups",
            ))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Config already exists"))
            .with_suggestion(Guidance::new("Overwrite it").with_command("reportcfg init --force"))
    }
}
