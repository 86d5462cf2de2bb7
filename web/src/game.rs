use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use memorito_core as game;
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::ResolveOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::ResolveOutcome| outcome.has_update())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CardClick(game::CardId),
    Resolve(game::PendingPair),
    NewGame,
    Shuffle,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<String>,

    /// How long both cards stay face up before the pair is resolved
    #[arg(long)]
    delay_ms: Option<u32>,

    /// Cards per row
    #[arg(long)]
    columns: Option<u8>,
}

impl GameProps {
    fn game_config(&self) -> game::GameConfig {
        let mut config = game::GameConfig::default();
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_reveal_delay_ms(delay_ms);
        }
        if let Some(columns) = self.columns {
            config = config.with_columns(columns);
        }
        config
    }

    fn forced_seed(&self) -> Option<u64> {
        self.seed.as_deref().map(parse_seed)
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    card: game::CardView,
    callback: Callback<game::CardId>,
}

#[function_component(CardTile)]
fn card_component(props: &CardProps) -> Html {
    let CardProps { card, callback } = props.clone();
    let id = card.id;

    let class = classes!(
        "card",
        card.symbol.is_some().then_some("face-up"),
        card.is_matched.then_some("matched"),
    );
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", id);
        callback.emit(id);
    });
    let face = card
        .symbol
        .map_or_else(|| "?".to_string(), |symbol| symbol.to_string());

    html! {
        <button {class} {onclick}>{face}</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct PlayerProps {
    player: game::Player,
    score: game::PairCount,
    active: bool,
}

#[function_component(PlayerBadge)]
fn player_component(props: &PlayerProps) -> Html {
    let class = classes!(
        "player",
        format!("player-{}", props.player.number()),
        props.active.then_some("active"),
    );

    html! {
        <aside {class}>{format!("{}: {}", props.player, props.score)}</aside>
    }
}

#[function_component(HowToPlay)]
fn how_to_play() -> Html {
    html! {
        <details class="how-to-play">
            <summary>{"How to Play"}</summary>
            <ul>
                <li>{"Click on cards to flip them and reveal the symbol"}</li>
                <li>{"Find matching pairs to score points"}</li>
                <li>{"If you find a match, you get another turn"}</li>
                <li>{"If no match, play passes to the other player"}</li>
                <li>{"The player with the most matches wins!"}</li>
            </ul>
        </details>
    }
}

fn final_score_line(scores: game::Scores) -> String {
    format!(
        "Final Score - Player 1: {}, Player 2: {}",
        scores[game::Player::One],
        scores[game::Player::Two]
    )
}

fn game_over_banner(obs: &game::Observation) -> Html {
    let Some(winner) = obs.winner else {
        return html! {};
    };

    html! {
        <article class="game-over">
            <h2>{"Game Over!"}</h2>
            <p>{winner.to_string()}</p>
            <small>{final_score_line(obs.scores)}</small>
        </article>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
    pending_resolution: Option<Timeout>,
}

impl GameView {
    fn flip_card(&mut self, ctx: &Context<Self>, id: game::CardId) -> bool {
        match self.session.flip_card(id) {
            Ok(game::FlipOutcome::Flipped) => true,
            Ok(game::FlipOutcome::PairPending(pair)) => {
                self.schedule_resolution(ctx, pair);
                true
            }
            Err(err) => {
                log::trace!("ignored click on card {}: {}", id, err);
                false
            }
        }
    }

    fn schedule_resolution(&mut self, ctx: &Context<Self>, pair: game::PendingPair) {
        let link = ctx.link().clone();
        let delay_ms = self.session.config().reveal_delay_ms();
        log::debug!("resolving {:?} in {}ms", pair, delay_ms);
        self.pending_resolution = Some(Timeout::new(delay_ms, move || {
            link.send_message(Msg::Resolve(pair))
        }));
    }

    fn resolve(&mut self, pair: game::PendingPair) -> bool {
        let outcome = self.session.resolve_pending_pair(pair);
        if let Ok(outcome) = outcome {
            log::debug!("resolved {:?}: {:?}", pair, outcome);
            self.pending_resolution = None;
        }
        outcome.has_update()
    }

    /// Dropping the handle cancels the timer, the generation bump rejects one that already fired.
    fn cancel_resolution(&mut self) {
        if self.pending_resolution.take().is_some() {
            log::debug!("cancelled pending resolution");
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.forced_seed().unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        Self {
            session: game::GameSession::new(props.game_config(), seed),
            pending_resolution: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CardClick(id) => self.flip_card(ctx, id),
            Resolve(pair) => self.resolve(pair),
            NewGame => {
                self.cancel_resolution();
                let seed = js_random_seed();
                log::debug!("new game, seed: {}", seed);
                self.session.new_game(seed);
                true
            }
            Shuffle => {
                self.cancel_resolution();
                let seed = js_random_seed();
                log::debug!("shuffle, seed: {}", seed);
                self.session.reshuffle(seed);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let obs = self.session.observe();
        let columns = self.session.config().columns();
        let board_style = format!("grid-template-columns: repeat({}, 1fr)", columns);

        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);
        let cb_shuffle = ctx.link().callback(|_: MouseEvent| Shuffle);

        html! {
            <div class="memorito">
                <header>
                    <h1>{"🏆 Memory Card Game"}</h1>
                    <p>{"Find matching pairs to score points!"}</p>
                </header>
                <nav>
                    {
                        for game::Player::ALL.into_iter().map(|player| html! {
                            <PlayerBadge
                                {player}
                                score={obs.scores[player]}
                                active={obs.current_player == player}
                            />
                        })
                    }
                    <span class="moves">{format!("Moves: {}", obs.move_count)}</span>
                </nav>
                { game_over_banner(&obs) }
                <section class={classes!("board", obs.resolving.then_some("resolving"))} style={board_style}>
                    {
                        for obs.cards.iter().cloned().map(|card| {
                            let callback = ctx.link().callback(CardClick);
                            let key = card.id;
                            html! {
                                <CardTile {key} {card} {callback}/>
                            }
                        })
                    }
                </section>
                <footer>
                    <button class="new-game" onclick={cb_new_game}>{"New Game"}</button>
                    <button class="shuffle" onclick={cb_shuffle}>{"Shuffle"}</button>
                </footer>
                <HowToPlay/>
            </div>
        }
    }
}
