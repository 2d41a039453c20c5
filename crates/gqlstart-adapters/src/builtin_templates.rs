//! Built-in template catalog.
//!
//! The starters that ship with gqlstart are compiled into the binary as
//! embedded bundles, so scaffolding works offline and without a templates
//! directory. [`registry_with_directory`] layers user templates from disk on
//! top of them.
//!
//! | Name                | Stack                                  |
//! |---------------------|----------------------------------------|
//! | `typescript-yoga`   | graphql-yoga + TypeScript (default)    |
//! | `flow-yoga`         | graphql-yoga + Flow                    |
//! | `typescript-apollo` | apollo-server + TypeScript             |

use std::path::Path;

use tracing::{debug, instrument};

use gqlstart_core::domain::{
    DomainError, EmbeddedFile, Template, TemplateRegistry, TemplateSource,
};

use crate::template_loader::FilesystemTemplateLoader;

/// Name of the template used when none is requested.
pub const DEFAULT_TEMPLATE: &str = "typescript-yoga";

/// The built-in catalog.
pub fn builtin_registry() -> Result<TemplateRegistry, DomainError> {
    let templates = vec![
        Template::new(
            "typescript-yoga",
            "GraphQL Yoga server with TypeScript",
            TemplateSource::Embedded(TYPESCRIPT_YOGA),
        )?,
        Template::new(
            "flow-yoga",
            "GraphQL Yoga server with Flow",
            TemplateSource::Embedded(FLOW_YOGA),
        )?,
        Template::new(
            "typescript-apollo",
            "Apollo Server with TypeScript",
            TemplateSource::Embedded(TYPESCRIPT_APOLLO),
        )?,
    ];
    TemplateRegistry::new(templates, DEFAULT_TEMPLATE)
}

/// Built-in catalog extended with the templates found in `dir`.
///
/// A missing directory contributes nothing. A user template named like a
/// built-in one is a [`DomainError::DuplicateTemplate`].
#[instrument]
pub fn registry_with_directory(dir: &Path) -> Result<TemplateRegistry, DomainError> {
    let registry = builtin_registry()?;
    if !dir.exists() {
        debug!("user templates directory does not exist, using built-ins only");
        return Ok(registry);
    }

    let extra = FilesystemTemplateLoader::new(dir).load_all()?;
    debug!(count = extra.len(), "user templates loaded");
    registry.extend(extra)
}

// ── typescript-yoga ───────────────────────────────────────────────────────────

static TYPESCRIPT_YOGA: &[EmbeddedFile] = &[
    EmbeddedFile::new(
        "package.json",
        r#"{
  "name": "typescript-yoga",
  "private": true,
  "scripts": {
    "start": "ts-node-dev --no-notify --respawn --transpileOnly ./src",
    "gen": "graphqlgen"
  },
  "dependencies": {
    "graphql-yoga": "1.16.7"
  },
  "devDependencies": {
    "graphqlgen": "0.6.0-rc9",
    "ts-node-dev": "1.0.0-pre.32",
    "typescript": "3.2.2"
  }
}
"#,
    ),
    EmbeddedFile::new(
        "graphqlgen.yml",
        r#"language: typescript

schema: ./src/schema.graphql
context: ./src/types.ts:Context
models:
  files:
    - ./src/types.ts

output: ./src/generated/graphqlgen.ts

resolver-scaffolding:
  output: ./src/generated/tmp-resolvers/
  layout: file-per-type
"#,
    ),
    EmbeddedFile::new(
        "tsconfig.json",
        r#"{
  "compilerOptions": {
    "target": "es2016",
    "module": "commonjs",
    "strict": true,
    "outDir": "dist",
    "lib": ["esnext", "dom"]
  }
}
"#,
    ),
    EmbeddedFile::new(".gitignore", "node_modules\ndist\n"),
    EmbeddedFile::new(
        "src/schema.graphql",
        r#"type Query {
  user(id: ID!): User
}

type User {
  id: ID!
  name: String!
}
"#,
    ),
    EmbeddedFile::new(
        "src/types.ts",
        r#"export interface Context {
  data: Data
}

export interface Data {
  users: User[]
}

export interface User {
  id: string
  name: string
}
"#,
    ),
    EmbeddedFile::new(
        "src/index.ts",
        r#"import { GraphQLServer } from 'graphql-yoga'
import { resolvers } from './resolvers'
import { data } from './data'

const server = new GraphQLServer({
  typeDefs: './src/schema.graphql',
  resolvers,
  context: { data },
} as any)

server.start(() => console.log('Server is running on http://localhost:4000'))
"#,
    ),
    EmbeddedFile::new(
        "src/data.ts",
        r#"import { Data } from './types'

export const data: Data = {
  users: [{ id: '1', name: 'Alice' }],
}
"#,
    ),
    EmbeddedFile::new(
        "src/resolvers/index.ts",
        r#"import { Resolvers } from '../generated/graphqlgen'
import { Query } from './Query'
import { User } from './User'

export const resolvers: Resolvers = {
  Query,
  User,
}
"#,
    ),
    EmbeddedFile::new(
        "src/resolvers/Query.ts",
        r#"import { QueryResolvers } from '../generated/graphqlgen'

export const Query: QueryResolvers.Type = {
  ...QueryResolvers.defaultResolvers,
  user: (parent, { id }, ctx) => ctx.data.users.find(user => user.id === id) || null,
}
"#,
    ),
    EmbeddedFile::new(
        "src/resolvers/User.ts",
        r#"import { UserResolvers } from '../generated/graphqlgen'

export const User: UserResolvers.Type = {
  ...UserResolvers.defaultResolvers,
}
"#,
    ),
];

// ── flow-yoga ─────────────────────────────────────────────────────────────────

static FLOW_YOGA: &[EmbeddedFile] = &[
    EmbeddedFile::new(
        "package.json",
        r#"{
  "name": "flow-yoga",
  "private": true,
  "scripts": {
    "start": "babel-node ./src/index.js",
    "flow": "flow",
    "gen": "graphqlgen"
  },
  "dependencies": {
    "graphql-yoga": "1.16.7"
  },
  "devDependencies": {
    "@babel/cli": "7.2.3",
    "@babel/core": "7.2.2",
    "@babel/node": "7.2.2",
    "@babel/preset-env": "7.2.3",
    "@babel/preset-flow": "7.0.0",
    "flow-bin": "0.89.0",
    "graphqlgen": "0.6.0-rc9"
  }
}
"#,
    ),
    EmbeddedFile::new(
        ".babelrc",
        r#"{
  "presets": ["@babel/preset-env", "@babel/preset-flow"]
}
"#,
    ),
    EmbeddedFile::new(".flowconfig", "[ignore]\n\n[include]\n\n[libs]\n\n[options]\n"),
    EmbeddedFile::new(".gitignore", "node_modules\n"),
    EmbeddedFile::new(
        "graphqlgen.yml",
        r#"language: flow

schema: ./src/schema.graphql
context: ./src/types.js:Context
models:
  files:
    - ./src/types.js

output: ./src/generated/graphqlgen.js

resolver-scaffolding:
  output: ./src/generated/tmp-resolvers/
  layout: file-per-type
"#,
    ),
    EmbeddedFile::new(
        "src/schema.graphql",
        r#"type Query {
  user(id: ID!): User
}

type User {
  id: ID!
  name: String!
}
"#,
    ),
    EmbeddedFile::new(
        "src/types.js",
        r#"// @flow

export type Context = {
  data: Data,
}

export type Data = {
  users: User[],
}

export type User = {
  id: string,
  name: string,
}
"#,
    ),
    EmbeddedFile::new(
        "src/index.js",
        r#"// @flow
import { GraphQLServer } from 'graphql-yoga'
import { resolvers } from './resolvers'

const data = { users: [{ id: '1', name: 'Alice' }] }

const server = new GraphQLServer({
  typeDefs: './src/schema.graphql',
  resolvers,
  context: { data },
})

server.start(() => console.log('Server is running on http://localhost:4000'))
"#,
    ),
    EmbeddedFile::new(
        "src/resolvers/index.js",
        r#"// @flow
import { Query } from './Query'
import { User } from './User'

export const resolvers = {
  Query,
  User,
}
"#,
    ),
    EmbeddedFile::new(
        "src/resolvers/Query.js",
        r#"// @flow
import type { Query_Type } from '../generated/graphqlgen'

export const Query: Query_Type = {
  user: (parent, { id }, ctx) => ctx.data.users.find(user => user.id === id) || null,
}
"#,
    ),
    EmbeddedFile::new(
        "src/resolvers/User.js",
        r#"// @flow
import { User_defaultResolvers } from '../generated/graphqlgen'
import type { User_Type } from '../generated/graphqlgen'

export const User: User_Type = {
  ...User_defaultResolvers,
}
"#,
    ),
];

// ── typescript-apollo ─────────────────────────────────────────────────────────

static TYPESCRIPT_APOLLO: &[EmbeddedFile] = &[
    EmbeddedFile::new(
        "package.json",
        r#"{
  "name": "typescript-apollo",
  "private": true,
  "scripts": {
    "start": "ts-node-dev --no-notify --respawn --transpileOnly ./src",
    "gen": "graphqlgen"
  },
  "dependencies": {
    "apollo-server": "2.3.1",
    "graphql": "14.0.2",
    "graphql-import": "0.7.1"
  },
  "devDependencies": {
    "graphqlgen": "0.6.0-rc9",
    "ts-node-dev": "1.0.0-pre.32",
    "typescript": "3.2.2"
  }
}
"#,
    ),
    EmbeddedFile::new(
        "graphqlgen.yml",
        r#"language: typescript

schema: ./src/schema.graphql
context: ./src/types.ts:Context
models:
  files:
    - ./src/types.ts

output: ./src/generated/graphqlgen.ts

resolver-scaffolding:
  output: ./src/generated/tmp-resolvers/
  layout: file-per-type
"#,
    ),
    EmbeddedFile::new(
        "tsconfig.json",
        r#"{
  "compilerOptions": {
    "target": "es2016",
    "module": "commonjs",
    "strict": true,
    "outDir": "dist",
    "lib": ["esnext", "dom"]
  }
}
"#,
    ),
    EmbeddedFile::new(".gitignore", "node_modules\ndist\n"),
    EmbeddedFile::new(
        "src/schema.graphql",
        r#"type Query {
  post(id: ID!): Post
  posts: [Post!]!
}

type Post {
  id: ID!
  title: String!
  published: Boolean!
}
"#,
    ),
    EmbeddedFile::new(
        "src/types.ts",
        r#"export interface Context {
  db: Db
}

export interface Db {
  posts: Post[]
}

export interface Post {
  id: string
  title: string
  published: boolean
}
"#,
    ),
    EmbeddedFile::new(
        "src/index.ts",
        r#"import { ApolloServer } from 'apollo-server'
import { importSchema } from 'graphql-import'
import { resolvers } from './resolvers'
import { Context } from './types'

const db: Context['db'] = {
  posts: [{ id: '1', title: 'Hello graphqlgen', published: true }],
}

const server = new ApolloServer({
  typeDefs: importSchema('./src/schema.graphql'),
  resolvers: resolvers as any,
  context: (): Context => ({ db }),
})

server.listen().then(({ url }) => console.log(`Server is running on ${url}`))
"#,
    ),
    EmbeddedFile::new(
        "src/resolvers/index.ts",
        r#"import { Resolvers } from '../generated/graphqlgen'
import { Query } from './Query'
import { Post } from './Post'

export const resolvers: Resolvers = {
  Query,
  Post,
}
"#,
    ),
    EmbeddedFile::new(
        "src/resolvers/Query.ts",
        r#"import { QueryResolvers } from '../generated/graphqlgen'

export const Query: QueryResolvers.Type = {
  ...QueryResolvers.defaultResolvers,
  post: (parent, { id }, ctx) => ctx.db.posts.find(post => post.id === id) || null,
  posts: (parent, args, ctx) => ctx.db.posts,
}
"#,
    ),
    EmbeddedFile::new(
        "src/resolvers/Post.ts",
        r#"import { PostResolvers } from '../generated/graphqlgen'

export const Post: PostResolvers.Type = {
  ...PostResolvers.defaultResolvers,
}
"#,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let registry = builtin_registry().unwrap();
        assert_eq!(
            registry.names(),
            vec!["typescript-yoga", "flow-yoga", "typescript-apollo"]
        );
        assert_eq!(registry.default_template().name(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn every_builtin_ships_a_graphqlgen_config_and_schema() {
        for template in builtin_registry().unwrap().templates() {
            let TemplateSource::Embedded(files) = template.source() else {
                panic!("{} should be embedded", template.name());
            };
            let paths: Vec<&str> = files.iter().map(|f| f.path).collect();
            assert!(paths.contains(&"graphqlgen.yml"), "{}", template.name());
            assert!(paths.contains(&"src/schema.graphql"), "{}", template.name());
            assert!(paths.contains(&"package.json"), "{}", template.name());
        }
    }

    #[test]
    fn missing_user_directory_yields_builtins() {
        let registry = registry_with_directory(Path::new("/definitely/not/here")).unwrap();
        assert_eq!(registry.len(), 3);
    }
}
