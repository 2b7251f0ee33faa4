mod registry;
mod yarn_kill;
