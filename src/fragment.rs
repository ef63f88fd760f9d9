use itertools::Itertools;

use crate::common::{MyResult, MyResultTrait};
use crate::fixture::Fixture;

/// Markup for a single fixture. Values are substituted verbatim, without
/// HTML escaping.
pub const FRAGMENT_TEMPLATE: &str = concat!(
    "\n        <div class=\"jogo\">",
    "\n            <div class=\"data-hora\">🗓️ {data} ⏰ {horario}</div>",
    "\n            <div class=\"times\">⚽ {jogo}</div>",
    "\n            <div class=\"transmissao\">📺 {ondepassa}</div>",
    "\n        </div>",
);

/// The literal text around the placeholders of [FRAGMENT_TEMPLATE], in order.
pub(crate) fn skeleton() -> Vec<&'static str> {
    FRAGMENT_TEMPLATE
        .split(|c: char| c == '{' || c == '}')
        .step_by(2)
        .collect()
}

pub fn render_fixture(fixture: &Fixture) -> MyResult<String> {
    strfmt::strfmt(FRAGMENT_TEMPLATE, &fixture.vars()).my_result()
}

/// Renders every fixture and concatenates the blocks in input order.
/// Stops at the first fixture that fails to render.
pub fn render_fixtures<'a, I>(fixtures: I) -> MyResult<String>
where
    I: IntoIterator<Item = &'a Fixture>,
{
    itertools::process_results(fixtures.into_iter().map(render_fixture), |mut blocks| blocks.join(""))
}
