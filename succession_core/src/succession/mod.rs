//! Succession module - lines of succession and dispute bookkeeping for dignities.
//!
//! Primogeniture lines are collected by walking the family graph:
//! 1. **Descendants**: the holder's children and their lines, eldest first
//! 2. **Siblings**: the holder's siblings and their lines
//! 3. **Parents' siblings**: aunts, uncles and their lines
//!
//! Agnatic seniority instead ranks every living man of the holder's house by
//! age. Either way the collected candidates are sorted once, and every
//! candidate, excluded or not, receives a numbered position.

mod disputes;
mod eligibility;

pub use disputes::*;
pub use eligibility::*;

use std::cmp::Ordering;
use std::collections::HashSet;

use lineage_model::{Dignity, HistoricDate, Person, PersonId, SuccessionRules, SuccessionType};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::kinship::{FamilyGraph, KinshipClassifier, KinshipLabel, PersonIndex};

/// Where in the family a candidate sits relative to the holder.
///
/// Variant order is the ranking order between branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// Descendant of the holder.
    Direct,
    /// Descendant of the holder's parents or grandparents.
    Collateral,
    /// Member of the holder's house, ranked by age.
    Dynasty,
    /// Named by the holder under a non-hereditary succession type.
    Designated,
}

/// A ranked claimant in a line of succession.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub person_id: PersonId,
    /// 1-based rank, counting excluded candidates too.
    pub position: usize,
    /// How the candidate is related to the current holder.
    pub relationship_label: Option<KinshipLabel>,
    pub branch: Branch,
    /// Generations below the holder's own; `None` outside the family walk.
    pub generation: Option<u32>,
    pub born: Option<HistoricDate>,
    pub excluded: bool,
    pub exclusion_reason: Option<ExclusionReason>,
    pub lower_priority: bool,
}

impl Candidate {
    /// Human-readable relation to the holder.
    pub fn relationship_description(&self) -> String {
        match self.relationship_label {
            Some(label) => label.to_string(),
            None => "Relative".to_string(),
        }
    }

    fn birth_key(&self) -> HistoricDate {
        self.born.unwrap_or(HistoricDate::FAR_FUTURE)
    }
}

/// Ordering of collected candidates for one succession type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ranking {
    Generational,
    Seniority,
}

/// Computes lines of succession over one graph snapshot.
pub struct SuccessionCalculator<'a> {
    graph: &'a FamilyGraph,
    classifier: KinshipClassifier<'a>,
    config: EngineConfig,
}

impl<'a> SuccessionCalculator<'a> {
    /// Create a calculator with the default configuration.
    pub fn new(graph: &'a FamilyGraph, people: PersonIndex<'a>) -> Self {
        Self {
            graph,
            classifier: KinshipClassifier::new(graph, people),
            config: EngineConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// The ranked line of succession for a dignity.
    ///
    /// Non-hereditary succession types yield only the designated heir. A
    /// dignity without a current holder yields nothing.
    pub fn line(&self, dignity: &Dignity) -> Vec<Candidate> {
        let (holder, ranking, mut candidates) = match dignity.succession_type {
            SuccessionType::Elective
            | SuccessionType::Tanistry
            | SuccessionType::Appointment
            | SuccessionType::Custom => return self.designated(dignity),
            SuccessionType::MalePrimogeniture => {
                let Some(holder) = dignity.current_holder_id else {
                    return Vec::new();
                };
                (holder, Ranking::Generational, self.primogeniture(dignity, holder, true))
            }
            SuccessionType::AbsolutePrimogeniture => {
                let Some(holder) = dignity.current_holder_id else {
                    return Vec::new();
                };
                (holder, Ranking::Generational, self.primogeniture(dignity, holder, false))
            }
            SuccessionType::AgnaticSeniority => {
                let Some(holder) = dignity.current_holder_id else {
                    return Vec::new();
                };
                (holder, Ranking::Seniority, self.agnatic_seniority(dignity, holder))
            }
        };

        candidates.sort_by(|a, b| compare(a, b, ranking));
        for (index, candidate) in candidates.iter_mut().enumerate() {
            candidate.position = index + 1;
        }

        debug!(
            dignity = %dignity.id,
            holder = %holder,
            candidates = candidates.len(),
            eligible = candidates.iter().filter(|c| !c.excluded).count(),
            "computed line of succession"
        );
        candidates
    }

    /// The first eligible candidate within the heir generation limit.
    pub fn heir(&self, dignity: &Dignity) -> Option<Candidate> {
        let limit = self.config.heir_generation_limit;
        self.line(dignity)
            .into_iter()
            .find(|c| !c.excluded && c.generation.map_or(true, |g| g <= limit))
    }

    fn designated(&self, dignity: &Dignity) -> Vec<Candidate> {
        let Some(heir) = dignity.designated_heir_id else {
            return Vec::new();
        };
        let relationship_label = dignity
            .current_holder_id
            .and_then(|holder| self.classifier.label(holder, heir));

        vec![Candidate {
            person_id: heir,
            position: 1,
            relationship_label,
            branch: Branch::Designated,
            generation: None,
            born: self.person(heir).and_then(|p| p.date_of_birth),
            excluded: false,
            exclusion_reason: None,
            lower_priority: false,
        }]
    }

    fn primogeniture(
        &self,
        dignity: &Dignity,
        holder: PersonId,
        male_preference: bool,
    ) -> Vec<Candidate> {
        let rules = &dignity.succession_rules;
        let mut visited = HashSet::from([holder]);
        let mut found = Vec::new();

        let children =
            self.birth_order(self.graph.children(holder).iter().copied(), male_preference);
        self.walk(
            holder,
            children,
            1,
            Branch::Direct,
            rules,
            male_preference,
            &mut visited,
            &mut found,
        );

        // Parents and grandparents are never candidates themselves.
        let parents: Vec<PersonId> = self.graph.parents(holder).iter().copied().collect();
        visited.extend(parents.iter().copied());
        visited.extend(self.graph.grandparents(holder));

        let siblings = self.birth_order(self.graph.siblings(holder), male_preference);
        self.walk(
            holder,
            siblings,
            1,
            Branch::Collateral,
            rules,
            male_preference,
            &mut visited,
            &mut found,
        );

        let parents_siblings = self.birth_order(
            parents.iter().flat_map(|parent| self.graph.siblings(*parent)),
            male_preference,
        );
        self.walk(
            holder,
            parents_siblings,
            2,
            Branch::Collateral,
            rules,
            male_preference,
            &mut visited,
            &mut found,
        );

        found
    }

    /// Depth-first preorder walk down from `roots`, using an explicit stack.
    #[allow(clippy::too_many_arguments)]
    fn walk(
        &self,
        holder: PersonId,
        roots: Vec<PersonId>,
        start_depth: u32,
        branch: Branch,
        rules: &SuccessionRules,
        male_preference: bool,
        visited: &mut HashSet<PersonId>,
        found: &mut Vec<Candidate>,
    ) {
        let mut stack: Vec<(PersonId, u32)> =
            roots.into_iter().rev().map(|id| (id, start_depth)).collect();

        while let Some((id, depth)) = stack.pop() {
            if depth > self.config.max_depth || !visited.insert(id) {
                continue;
            }

            if let Some(person) = self.person(id) {
                let eligibility = assess(person, rules, male_preference);
                found.push(self.candidate(holder, person, branch, Some(depth), eligibility));
            }

            let children =
                self.birth_order(self.graph.children(id).iter().copied(), male_preference);
            stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }
    }

    fn agnatic_seniority(&self, dignity: &Dignity, holder: PersonId) -> Vec<Candidate> {
        let house = self
            .person(holder)
            .and_then(|p| p.house_id)
            .or(dignity.current_house_id);
        let Some(house) = house else {
            debug!(dignity = %dignity.id, "no house known for agnatic seniority");
            return Vec::new();
        };

        let mut pool: Vec<&Person> = self
            .classifier
            .people()
            .iter()
            .filter(|p| p.id != holder && p.house_id == Some(house))
            .filter(|p| p.is_alive() && p.is_male())
            .collect();
        pool.sort_by_key(|p| (p.birth_sort_key(), p.id));

        pool.into_iter()
            .map(|person| {
                let eligibility = assess(person, &dignity.succession_rules, false);
                self.candidate(holder, person, Branch::Dynasty, None, eligibility)
            })
            .collect()
    }

    fn candidate(
        &self,
        holder: PersonId,
        person: &Person,
        branch: Branch,
        generation: Option<u32>,
        eligibility: Eligibility,
    ) -> Candidate {
        if let Some(reason) = eligibility.exclusion {
            trace!(person = %person.id, %reason, "candidate excluded");
        }
        Candidate {
            person_id: person.id,
            position: 0,
            relationship_label: self.classifier.label(holder, person.id),
            branch,
            generation,
            born: person.date_of_birth,
            excluded: eligibility.is_excluded(),
            exclusion_reason: eligibility.exclusion,
            lower_priority: eligibility.lower_priority,
        }
    }

    /// Sort siblings into inheritance order: daughters after everyone else
    /// under male preference, then eldest first. Unknown births go last.
    fn birth_order(
        &self,
        ids: impl IntoIterator<Item = PersonId>,
        male_preference: bool,
    ) -> Vec<PersonId> {
        let mut ids: Vec<PersonId> = ids.into_iter().collect();
        ids.sort_by_key(|id| {
            let person = self.person(*id);
            let female = person.is_some_and(Person::is_female);
            let born = person.map_or(HistoricDate::FAR_FUTURE, Person::birth_sort_key);
            (male_preference && female, born, *id)
        });
        ids.dedup();
        ids
    }

    fn person(&self, id: PersonId) -> Option<&'a Person> {
        self.classifier.people().get(id)
    }
}

fn compare(a: &Candidate, b: &Candidate, ranking: Ranking) -> Ordering {
    a.excluded
        .cmp(&b.excluded)
        .then(a.lower_priority.cmp(&b.lower_priority))
        .then_with(|| match ranking {
            Ranking::Seniority => a.birth_key().cmp(&b.birth_key()),
            Ranking::Generational => a
                .branch
                .cmp(&b.branch)
                .then(a.generation.cmp(&b.generation))
                .then(a.birth_key().cmp(&b.birth_key())),
        })
}

/// The ranked line of succession, walking at most `max_depth` generations.
pub fn succession_line<'a>(
    dignity: &Dignity,
    people: impl IntoIterator<Item = &'a Person>,
    graph: &FamilyGraph,
    max_depth: u32,
) -> Vec<Candidate> {
    let config = EngineConfig::default().with_max_depth(max_depth);
    SuccessionCalculator::new(graph, PersonIndex::new(people))
        .with_config(config)
        .line(dignity)
}

/// The heir apparent or presumptive, if any.
pub fn heir<'a>(
    dignity: &Dignity,
    people: impl IntoIterator<Item = &'a Person>,
    graph: &FamilyGraph,
) -> Option<Candidate> {
    SuccessionCalculator::new(graph, PersonIndex::new(people)).heir(dignity)
}
