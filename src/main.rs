use anyhow::{Context, Result};
use cronify::config::Config;
use cronify::{Cronifier, FjallStore, Graph, Term};
use jiff::Timestamp;
use tracing::info;

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Timestamp RDF graphs and file them under time-derived IRIs.
        cmd cronify {
            /// TOML config file.
            optional -c, --config path: PathBuf

            /// Stamp a subject, store its graph and print the new IRI.
            cmd stamp {
                /// Container IRI.
                required container: String
                /// Subject IRI.
                required subject: String
                /// Literal property on the subject as `predicate=value`.
                repeated -p, --property property: String
                /// ISO-8601 timestamp to use instead of now.
                optional --at timestamp: String
            }
            /// Print the triples stored at an IRI.
            cmd show {
                required iri: String
            }
            /// List the members of a container.
            cmd members {
                required container: String
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let flags = flags::Cronify::from_env_or_exit();
    let config = match &flags.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    let cronifier = Cronifier::new(config.vocabulary.into());
    let store = FjallStore::open(&config.store.path)?;

    match flags.subcommand {
        flags::CronifyCmd::Stamp(cmd) => {
            let subject = Term::iri(cmd.subject);
            let container = Term::iri(cmd.container);
            let timestamp = cmd
                .at
                .map(|at| at.parse::<Timestamp>())
                .transpose()
                .context("--at should be an ISO-8601 timestamp")?;

            let mut graph = Graph::new();
            for property in &cmd.property {
                let (predicate, value) = property
                    .split_once('=')
                    .with_context(|| format!("{property:?} should look like predicate=value"))?;
                graph.insert(subject.clone(), Term::iri(predicate), Term::literal(value));
            }
            let graph = cronifier.add_timestamp(graph, &subject, timestamp);
            let iri = cronifier.store(&store, &subject, &container, &graph).await?;
            store.persist()?;

            info!(target: "cronify", iri = iri.as_str(), "stored");
            println!("{}", iri.as_str());
        }
        flags::CronifyCmd::Show(cmd) => {
            let graph = store
                .find(&cmd.iri)?
                .with_context(|| format!("nothing stored at {}", cmd.iri))?;
            for triple in &graph {
                println!("{} {} {} .", triple.subject, triple.predicate, triple.object);
            }
        }
        flags::CronifyCmd::Members(cmd) => {
            let container = Term::iri(cmd.container);
            if let Some(graph) = store.find(container.as_str())? {
                let predicate = cronifier.container_predicate();
                for triple in graph.matching(Some(&container), Some(predicate), None) {
                    println!("{}", triple.object.as_str());
                }
            }
        }
    }

    Ok(())
}
