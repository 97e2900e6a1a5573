//! Intent dispatch: routes a skill request to a calendar query and renders
//! the outcome as speech.

use std::sync::LazyLock;

use guestworlds_calendar::application::query_handlers::{self, WorldAvailability};
use guestworlds_calendar::domain::schedule::Schedule;
use guestworlds_core::clock::Clock;
use guestworlds_core::error::QueryError;
use tracing::debug;

use crate::envelope::{SkillRequest, SkillResponse};
use crate::ssml::{BreakStrength, SsmlBuilder};

pub const GUEST_WORLDS_NOW_INTENT: &str = "GuestWorldsNowIntent";
pub const GUEST_WORLDS_NEXT_INTENT: &str = "GuestWorldsNextIntent";
pub const GUEST_WORLDS_DATE_INTENT: &str = "GuestWorldsDateIntent";
pub const WHEN_GUEST_WORLD_INTENT: &str = "WhenGuestWorldIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";

/// Slot carrying the requested date.
pub const DATE_SLOT: &str = "Date";
/// Slot carrying the requested world name.
pub const GUEST_WORLD_SLOT: &str = "GuestWorld";

/// Days are spoken as "December 3".
const SPOKEN_DAY_FORMAT: &str = "%B %-d";

const NOW_TITLE: &str = "Guest Worlds Now";
const NEXT_TITLE: &str = "Guest Worlds Next";
const DATE_TITLE: &str = "Guest Worlds Date";
const WHEN_TITLE: &str = "Guest World When";
const HELP_TITLE: &str = "Aide for Zwift help";
const OOPS_TITLE: &str = "Oops";
const OOPS_TEXT: &str = "Zwift Aide had a problem.";

static HELP_RESPONSE: LazyLock<SkillResponse> = LazyLock::new(|| {
    SsmlBuilder::new()
        .say("Here are some of the things you can ask:")
        .pause(BreakStrength::Strong)
        .say("What are the guest worlds now?")
        .pause(BreakStrength::Strong)
        .say("What are the next guest worlds?")
        .pause(BreakStrength::Strong)
        .say("Which worlds are available on December 10th?")
        .pause(BreakStrength::Strong)
        .say("When can I ride Richmond?")
        .into_response(HELP_TITLE)
});

/// Answers a skill request. Launch requests, the help intent, and any
/// intent the skill does not know all get the help response.
pub fn respond(request: &SkillRequest, clock: &dyn Clock, schedule: &Schedule) -> SkillResponse {
    match request.intent_name() {
        Some(GUEST_WORLDS_NOW_INTENT) => guest_worlds_now(schedule, clock),
        Some(GUEST_WORLDS_NEXT_INTENT) => guest_worlds_next(schedule, clock),
        Some(GUEST_WORLDS_DATE_INTENT) => {
            guest_worlds_on_date(schedule, request.slot_value(DATE_SLOT))
        }
        Some(WHEN_GUEST_WORLD_INTENT) => {
            when_guest_world(schedule, clock, request.slot_value(GUEST_WORLD_SLOT))
        }
        other => {
            debug!(intent = other, "answering with help");
            help()
        }
    }
}

/// The help response listing example questions.
#[must_use]
pub fn help() -> SkillResponse {
    HELP_RESPONSE.clone()
}

/// The generic apology used when handling a request failed unexpectedly.
#[must_use]
pub fn apology() -> SkillResponse {
    SkillResponse::plain_text(OOPS_TITLE, OOPS_TEXT)
}

fn guest_worlds_now(schedule: &Schedule, clock: &dyn Clock) -> SkillResponse {
    match query_handlers::current_worlds(schedule, clock.now()).ok_or(QueryError::NoActive) {
        Ok(view) => SsmlBuilder::new()
            .say("The current guest worlds on Zwift")
            .pause(BreakStrength::Weak)
            .say("are")
            .say(&view.worlds.world_a)
            .pause(BreakStrength::Weak)
            .say("and")
            .say(&view.worlds.world_b)
            .into_response(NOW_TITLE),
        Err(err) => {
            debug!(error = %err, "no active changeover");
            SsmlBuilder::new()
                .say("I couldn't find the current guest worlds")
                .into_response(NOW_TITLE)
        }
    }
}

fn guest_worlds_next(schedule: &Schedule, clock: &dyn Clock) -> SkillResponse {
    let Some(view) = query_handlers::next_worlds(schedule, clock.now()) else {
        // Rotations are often published late.
        return SsmlBuilder::new()
            .say("The next guest worlds are not currently available")
            .into_response(NEXT_TITLE);
    };

    SsmlBuilder::new()
        .say("The next guest worlds on Zwift")
        .pause(BreakStrength::Weak)
        .say("will be")
        .say(&view.worlds.world_a)
        .pause(BreakStrength::Weak)
        .say("and")
        .say(&view.worlds.world_b)
        .say(".")
        .pause(BreakStrength::Strong)
        .say("They will be available from")
        .say(&view.effective_at.format(SPOKEN_DAY_FORMAT).to_string())
        .into_response(NEXT_TITLE)
}

fn guest_worlds_on_date(schedule: &Schedule, date_text: Option<&str>) -> SkillResponse {
    match query_handlers::worlds_on_date(schedule, date_text) {
        Ok(view) => SsmlBuilder::new()
            .say("The guest worlds on Zwift")
            .pause(BreakStrength::Weak)
            .say("on")
            .say(&view.date.format(SPOKEN_DAY_FORMAT).to_string())
            .pause(BreakStrength::Weak)
            .say("are")
            .say(&view.worlds.world_a)
            .pause(BreakStrength::Weak)
            .say("and")
            .say(&view.worlds.world_b)
            .into_response(DATE_TITLE),
        Err(QueryError::NotFound(date)) => SsmlBuilder::new()
            .say("I couldn't find the guest worlds available on")
            .say(&date.format(SPOKEN_DAY_FORMAT).to_string())
            .into_response(DATE_TITLE),
        Err(err) => {
            debug!(error = %err, "date slot not understood");
            SsmlBuilder::new()
                .say("I didn't understand which date you asked about")
                .pause(BreakStrength::Strong)
                .say("Please try asking again.")
                .into_response(DATE_TITLE)
        }
    }
}

fn when_guest_world(
    schedule: &Schedule,
    clock: &dyn Clock,
    world_name: Option<&str>,
) -> SkillResponse {
    let Some(name) = world_name else {
        return unsure_which_world();
    };

    match query_handlers::world_availability(schedule, name, clock.now()) {
        Ok(WorldAvailability::Upcoming { from }) => SsmlBuilder::new()
            .say(name)
            .say("will next be available on")
            .say(&from.format(SPOKEN_DAY_FORMAT).to_string())
            .into_response(WHEN_TITLE),
        Ok(WorldAvailability::ActiveNow { since }) => SsmlBuilder::new()
            .say(name)
            .say("is a guest world now")
            .pause(BreakStrength::Weak)
            .say("available since")
            .say(&since.format(SPOKEN_DAY_FORMAT).to_string())
            .into_response(WHEN_TITLE),
        Err(QueryError::NoUpcoming(_)) => SsmlBuilder::new()
            .say(name)
            .say("has no dates available in the zwift guest world calendar.")
            .into_response(WHEN_TITLE),
        Err(err) => {
            debug!(error = %err, "guest world slot not understood");
            unsure_which_world()
        }
    }
}

fn unsure_which_world() -> SkillResponse {
    SsmlBuilder::new()
        .say("I'm not sure which guest world you asked about")
        .pause(BreakStrength::Strong)
        .say("Please try asking again.")
        .into_response(WHEN_TITLE)
}
